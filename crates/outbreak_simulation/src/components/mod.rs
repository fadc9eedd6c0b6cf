//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - player: персонаж игрока (PlayerCharacter, PlayerVitals, MovementModifiers, BloodEffect, SoundEmitter)
//! - ai: коллайдеры частей тела AI (AiBodyPart)
//! - inventory: weapon mounts (Inventory, WeaponMount)

pub mod ai;
pub mod inventory;
pub mod player;

pub use ai::*;
pub use inventory::*;
pub use player::*;
