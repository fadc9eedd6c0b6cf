//! Inventory systems
//!
//! - `toggle_inventory_screen`: кнопка Inventory: экран ↔ HUD, курсор
//! - `process_weapon_changes`: drop + assign по mount'у оружия
//! - `log_dropped_weapons`

use bevy::prelude::*;

use crate::components::Inventory;
use crate::hud::{CursorState, HudState};
use crate::input::PlayerInput;
use crate::weapon::WeaponCatalog;
use crate::{log, log_error};

use super::events::*;
use super::InventoryScreen;

/// System: открыть/закрыть экран инвентаря
///
/// Открытие прерывает остаток кадра игрока (см. `inventory_not_opening`).
pub fn toggle_inventory_screen(
    input: Res<PlayerInput>,
    mut screen: ResMut<InventoryScreen>,
    mut hud: ResMut<HudState>,
    mut cursor: ResMut<CursorState>,
) {
    screen.opened_this_frame = false;

    if !input.inventory_pressed || !screen.available {
        return;
    }

    if !screen.open {
        screen.open = true;
        screen.opened_this_frame = true;
        hud.visible = false;
        *cursor = CursorState::free();
    } else {
        screen.open = false;
        hud.visible = true;
        *cursor = CursorState::captured();
    }
}

/// Run condition: кадр, в котором открылся инвентарь, дальше не обрабатываем
pub fn inventory_not_opening(screen: Res<InventoryScreen>) -> bool {
    !screen.opened_this_frame
}

/// System: смена оружия → mount по handedness
pub fn process_weapon_changes(
    mut events: EventReader<WeaponChanged>,
    catalog: Res<WeaponCatalog>,
    mut inventories: Query<&mut Inventory>,
    mut dropped: EventWriter<WeaponDropped>,
) {
    for event in events.read() {
        let Ok(mut inventory) = inventories.get_mut(event.entity) else {
            log_error(&format!("Entity {:?} missing Inventory", event.entity));
            continue;
        };

        let Some(weapon) = catalog.weapon(&event.mount.weapon) else {
            log_error(&format!("WeaponDefinition not found: {}", event.mount.weapon));
            continue;
        };

        let mount_index = weapon.weapon_type.mount_index();

        if let Some(old) = inventory.drop_weapon(mount_index) {
            dropped.write(WeaponDropped {
                entity: event.entity,
                mount: old,
            });
        }

        inventory.assign_weapon(mount_index, event.mount.clone());
        inventory.active_mount = mount_index;

        log(&format!("Equipped {} to mount {}", weapon.name, mount_index));
    }
}

pub fn log_dropped_weapons(mut events: EventReader<WeaponDropped>) {
    for event in events.read() {
        log(&format!("Dropping Weapon {} ({:?})", event.mount.weapon, event.entity));
    }
}
