//! Player character components
//!
//! Здоровье, модификаторы движения (читает FPS controller host'а),
//! blood overlay камеры и радиус шума для AI.

use bevy::prelude::*;

use crate::audio::AudioCollection;

pub const MAX_HEALTH: f32 = 100.0;

/// Marker + runtime таймеры персонажа игрока
///
/// Все времена: `Time::elapsed_secs()`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerCharacter {
    pub next_pain_sound_time: f32,
    pub next_attack_time: f32,
    pub next_taunt_time: f32,
    /// Когда показать game over (смерть / конец уровня)
    pub game_over_at: Option<f32>,
    pub dead: bool,
}

impl PlayerCharacter {
    /// Можно ли играть pain звук сейчас (строго после окончания предыдущего)
    pub fn pain_sound_ready(&self, now: f32) -> bool {
        self.next_pain_sound_time < now
    }

    /// Запланировать game over, если он ещё не запланирован
    pub fn schedule_game_over(&mut self, now: f32, delay: f32) {
        if self.game_over_at.is_none() {
            self.game_over_at = Some(now + delay);
        }
    }
}

/// Здоровье и заражение
///
/// Инвариант: 0 ≤ health ≤ MAX_HEALTH
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PlayerVitals {
    pub health: f32,
    pub infection: f32,
}

impl Default for PlayerVitals {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH,
            infection: 0.0,
        }
    }
}

impl PlayerVitals {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Урон в секунду × delta, health не опускается ниже 0
    pub fn take_damage(&mut self, amount_per_second: f32, delta: f32) {
        self.health = (self.health - amount_per_second * delta).max(0.0);
    }
}

/// Статус движения (выставляет FPS controller host'а)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum MoveStatus {
    #[default]
    NotMoving,
    Crouching,
    Walking,
    Running,
    NotGrounded,
    Landing,
}

/// Связь с FPS controller'ом: ECS пишет модификаторы, host пишет статус
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovementModifiers {
    pub status: MoveStatus,
    pub drag_multiplier: f32,
    pub drag_multiplier_limit: f32,
    pub freeze_movement: bool,
}

impl Default for MovementModifiers {
    fn default() -> Self {
        Self {
            status: MoveStatus::NotMoving,
            drag_multiplier: 1.0,
            drag_multiplier_limit: 1.0,
            freeze_movement: false,
        }
    }
}

/// Кровь на экране (post effect камеры)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BloodEffect {
    pub min_blood_amount: f32,
    pub blood_amount: f32,
}

impl BloodEffect {
    /// Пересчёт после урона
    pub fn apply_health(&mut self, health: f32) {
        self.min_blood_amount = (1.0 - health / MAX_HEALTH) * 0.5;
        self.blood_amount = (self.min_blood_amount + 0.3).min(1.0);
    }
}

/// Радиус, в котором AI слышит игрока
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SoundEmitter {
    pub radius: f32,
}

/// Звуки персонажа (любая коллекция может отсутствовать)
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerAudio {
    pub damage_sounds: Option<AudioCollection>,
    pub pain_sounds: Option<AudioCollection>,
    pub taunt_sounds: Option<AudioCollection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_scaled_by_delta() {
        let mut vitals = PlayerVitals::default();
        vitals.take_damage(10.0, 0.5);
        assert_eq!(vitals.health, 95.0);
        assert!(vitals.is_alive());
    }

    #[test]
    fn test_health_never_negative() {
        let mut vitals = PlayerVitals::default();
        vitals.take_damage(1000.0, 1.0);
        assert_eq!(vitals.health, 0.0);
        assert!(!vitals.is_alive());
    }

    #[test]
    fn test_blood_effect() {
        let mut blood = BloodEffect::default();

        blood.apply_health(100.0);
        assert_eq!(blood.min_blood_amount, 0.0);
        assert!((blood.blood_amount - 0.3).abs() < 1e-6);

        blood.apply_health(0.0);
        assert_eq!(blood.min_blood_amount, 0.5);
        assert!((blood.blood_amount - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_game_over_scheduled_once() {
        let mut player = PlayerCharacter::default();
        player.schedule_game_over(1.0, 3.0);
        player.schedule_game_over(2.0, 4.0);
        assert_eq!(player.game_over_at, Some(4.0));
    }

    #[test]
    fn test_pain_sound_gate() {
        let player = PlayerCharacter {
            next_pain_sound_time: 2.0,
            ..Default::default()
        };
        assert!(!player.pain_sound_ready(2.0));
        assert!(player.pain_sound_ready(2.1));
    }
}
