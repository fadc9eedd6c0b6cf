//! Inventory module: weapon mounts + экран инвентаря
//!
//! **Events → Systems flow:**
//! - UI / pickup шлёт `WeaponChanged`
//! - `process_weapon_changes` меняет `Inventory` компонент
//! - снятое оружие уходит в `WeaponDropped` (host спавнит его в мире)

use bevy::prelude::*;

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

use crate::PlayerFrameSet;

/// Экран инвентаря
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryScreen {
    /// Host подключил UI инвентаря
    pub available: bool,
    pub open: bool,
    /// Экран открыт в текущем кадре
    pub opened_this_frame: bool,
}

impl Default for InventoryScreen {
    fn default() -> Self {
        Self {
            available: true,
            open: false,
            opened_this_frame: false,
        }
    }
}

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventoryScreen>()
            .add_event::<WeaponChanged>()
            .add_event::<WeaponDropped>()
            .add_systems(
                Update,
                (
                    toggle_inventory_screen,
                    (process_weapon_changes, log_dropped_weapons).chain(),
                )
                    .in_set(PlayerFrameSet::Input),
            );
    }
}
