//! Inventory events
//!
//! - `WeaponChanged`: игрок выбрал оружие (inventory UI / подбор)
//! - `WeaponDropped`: оружие снято с mount'а (host спавнит pickup в мире)

use bevy::prelude::*;

use crate::components::WeaponMount;

/// Поставить оружие в mount по его handedness
///
/// # Flow
/// 1. Снять текущее оружие из mount'а (→ `WeaponDropped`)
/// 2. Поставить новое, сделать mount активным
#[derive(Event, Debug, Clone)]
pub struct WeaponChanged {
    pub entity: Entity,
    pub mount: WeaponMount,
}

#[derive(Event, Debug, Clone)]
pub struct WeaponDropped {
    pub entity: Entity,
    pub mount: WeaponMount,
}
