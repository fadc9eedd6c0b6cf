//! Audio cues (ECS → host)
//!
//! ECS решает КАКОЙ звук и КОГДА, host (audio manager движка) его играет.
//! Случайный клип выбирается через `DeterministicRng`: воспроизводимо по seed.

use bevy::prelude::*;
use rand::Rng;

/// Клип: имя ассета + длительность (секунды)
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub name: String,
    pub length: f32,
}

impl AudioClip {
    pub fn new(name: impl Into<String>, length: f32) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

/// Набор клипов + параметры воспроизведения
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCollection {
    /// Mixer group
    pub group: String,
    pub clips: Vec<AudioClip>,
    pub volume: f32,
    /// 0 = 2D, 1 = 3D
    pub spatial_blend: f32,
    pub priority: i32,
}

impl AudioCollection {
    pub fn new(group: impl Into<String>, clips: Vec<AudioClip>) -> Self {
        Self {
            group: group.into(),
            clips,
            volume: 1.0,
            spatial_blend: 1.0,
            priority: 128,
        }
    }

    pub fn clip(&self, index: usize) -> Option<&AudioClip> {
        self.clips.get(index)
    }

    pub fn random_clip<R: Rng>(&self, rng: &mut R) -> Option<&AudioClip> {
        if self.clips.is_empty() {
            return None;
        }
        self.clips.get(rng.gen_range(0..self.clips.len()))
    }
}

/// Event: сыграть one-shot звук в точке мира
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySound {
    pub group: String,
    pub clip: String,
    pub position: Vec3,
    pub volume: f32,
    pub spatial_blend: f32,
    pub priority: i32,
    /// Задержка перед воспроизведением (секунды)
    pub delay: f32,
}

impl PlaySound {
    pub fn one_shot(collection: &AudioCollection, clip: &AudioClip, position: Vec3) -> Self {
        Self {
            group: collection.group.clone(),
            clip: clip.name.clone(),
            position,
            volume: collection.volume,
            spatial_blend: collection.spatial_blend,
            priority: collection.priority,
            delay: 0.0,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn groans() -> AudioCollection {
        AudioCollection::new(
            "Player",
            vec![
                AudioClip::new("groan_01", 0.8),
                AudioClip::new("groan_02", 1.1),
                AudioClip::new("groan_03", 0.6),
            ],
        )
    }

    #[test]
    fn test_random_clip_deterministic() {
        let collection = groans();

        let picks = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..10)
                .map(|_| collection.random_clip(&mut rng).map(|c| c.name.clone()))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(7), picks(7));
        assert!(picks(7).iter().all(Option::is_some));
    }

    #[test]
    fn test_empty_collection() {
        let collection = AudioCollection::new("Player", Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(collection.random_clip(&mut rng).is_none());
        assert!(collection.clip(0).is_none());
    }

    #[test]
    fn test_play_sound_from_collection() {
        let collection = groans();
        let clip = collection.clip(1).expect("clip");
        let sound = PlaySound::one_shot(&collection, clip, Vec3::X).delayed(0.35);

        assert_eq!(sound.clip, "groan_02");
        assert_eq!(sound.group, "Player");
        assert_eq!(sound.delay, 0.35);
    }
}
