//! Player events
//!
//! **Входящие** (AI / host → ECS):
//! - `PlayerDamaged`: урон в секунду (применяется × frame delta)
//! - `LevelCompleted`
//!
//! **Исходящие** (ECS → AI / host):
//! - `AiDamageRequest`: melee удар игрока по AI
//! - `PlayerDied`, `GameOver`

use bevy::prelude::*;

use crate::weapon::BodyPart;

/// Урон игроку (зомби кусает, огонь и т.д.)
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDamaged {
    pub entity: Entity,
    /// Урон в секунду
    pub amount: f32,
    pub play_damage_sound: bool,
    pub play_pain_sound: bool,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct LevelCompleted {
    pub entity: Entity,
}

/// Melee удар игрока по части тела AI
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AiDamageRequest {
    pub attacker: Entity,
    /// AI актор (владелец части тела)
    pub target: Entity,
    pub body_part_collider: Entity,
    pub body_part: BodyPart,
    pub point: Vec3,
    pub force: Vec3,
    pub damage: i32,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDied {
    pub entity: Entity,
}

/// Host возвращается в главное меню
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOver {
    pub entity: Entity,
}
