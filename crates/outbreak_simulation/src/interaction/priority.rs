//! Crosshair ray + priority scan
//!
//! Из всех попаданий луча за кадр выбираем interactive item с наибольшим
//! priority. При равенстве побеждает первый встреченный.

use bevy::prelude::*;

/// Интерактивный объект в мире (дверь, выключатель, записка)
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Interactive {
    pub priority: i32,
    /// Текст подсказки под прицелом
    pub text: String,
}

impl Interactive {
    pub fn new(priority: i32, text: impl Into<String>) -> Self {
        Self {
            priority,
            text: text.into(),
        }
    }
}

/// Одно попадание луча
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

/// Луч из центра экрана на этот кадр
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CrosshairRay {
    pub origin: Vec3,
    /// Нормализованное направление
    pub direction: Vec3,
    /// Длина луча для interactive items
    pub interaction_length: f32,
    /// Длина луча для melee атаки
    pub melee_length: f32,
}

impl Default for CrosshairRay {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            interaction_length: 1.0,
            melee_length: 1.0,
        }
    }
}

/// Попадания crosshair луча за текущий кадр
///
/// Заполняет host (или rapier backend) после `CrosshairRay`:
/// - `interactive`: слой interactive объектов, до `interaction_length`
/// - `body_parts`: слой частей тела AI, до `melee_length`
#[derive(Resource, Debug, Clone, Default)]
pub struct CrosshairHits {
    pub interactive: Vec<RaycastHit>,
    pub body_parts: Vec<RaycastHit>,
}

impl CrosshairHits {
    pub fn clear(&mut self) {
        self.interactive.clear();
        self.body_parts.clear();
    }
}

/// Длина луча взаимодействия: при взгляде вверх/вниз дотягиваемся дальше
pub fn interaction_ray_length(forward: Vec3, min_length: f32, max_length: f32) -> f32 {
    let vertical = forward.normalize_or_zero().dot(Vec3::Y).abs();
    min_length + (max_length - min_length) * vertical
}

/// Выбор item с наибольшим priority среди попаданий
///
/// `lookup` возвращает Interactive для entity (None: не интерактивный, пропускаем).
/// Только строго больший priority заменяет текущий выбор.
pub fn select_priority_item<'a, 'h, F>(
    hits: impl IntoIterator<Item = &'h RaycastHit>,
    lookup: F,
) -> Option<(Entity, &'a Interactive)>
where
    F: Fn(Entity) -> Option<&'a Interactive>,
{
    let mut highest_priority = i32::MIN;
    let mut picked = None;

    for hit in hits {
        let Some(item) = lookup(hit.entity) else {
            continue;
        };

        if item.priority > highest_priority {
            highest_priority = item.priority;
            picked = Some((hit.entity, item));
        }
    }

    picked
}
