//! Player tuning (Resource)

use bevy::prelude::*;

/// Настройки персонажа игрока
///
/// Радиусы шума: в метрах, задержки: в секундах.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Радиус шума при ходьбе (минимальный)
    pub walk_radius: f32,
    pub run_radius: f32,
    pub landing_radius: f32,
    /// (100 - health) / scale → раненый игрок шумит сильнее
    pub blood_radius_scale: f32,
    pub taunt_radius: f32,

    /// Задержка pain звука после damage звука
    pub pain_sound_offset: f32,

    /// Пауза между melee ударами после попадания
    pub attack_interval: f32,
    pub melee_damage: i32,
    pub melee_force: f32,

    pub min_drag_multiplier_limit: f32,

    pub death_game_over_delay: f32,
    pub level_complete_game_over_delay: f32,
    pub fade_in_duration: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_radius: 0.0,
            run_radius: 7.0,
            landing_radius: 12.0,
            blood_radius_scale: 6.0,
            taunt_radius: 10.0,
            pain_sound_offset: 0.35,
            attack_interval: 0.5,
            melee_damage: 1,
            melee_force: 1.0,
            min_drag_multiplier_limit: 0.25,
            death_game_over_delay: 3.0,
            level_complete_game_over_delay: 4.0,
            fade_in_duration: 2.0,
        }
    }
}
