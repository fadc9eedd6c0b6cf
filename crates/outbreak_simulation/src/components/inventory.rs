//! Inventory: weapon mounts игрока
//!
//! Два mount'а:
//! - [0] single handed (пистолет, мачете)
//! - [1] two handed (дробовик, винтовка)

use bevy::prelude::*;

use crate::item::ItemId;

pub const MOUNT_COUNT: usize = 2;

/// Оружие в mount'е + патроны в стволе/магазине
#[derive(Debug, Clone, PartialEq, Eq, Reflect)]
pub struct WeaponMount {
    pub weapon: ItemId,
    pub in_gun_rounds: i32,
}

impl WeaponMount {
    pub fn new(weapon: impl Into<ItemId>) -> Self {
        Self {
            weapon: weapon.into(),
            in_gun_rounds: 0,
        }
    }

    pub fn with_rounds(weapon: impl Into<ItemId>, rounds: i32) -> Self {
        Self {
            weapon: weapon.into(),
            in_gun_rounds: rounds,
        }
    }
}

#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Inventory {
    mounts: [Option<WeaponMount>; MOUNT_COUNT],
    /// Mount, из которого сейчас стреляем
    pub active_mount: usize,
}

impl Inventory {
    pub fn mount(&self, index: usize) -> Option<&WeaponMount> {
        self.mounts.get(index).and_then(|m| m.as_ref())
    }

    pub fn active_weapon(&self) -> Option<&WeaponMount> {
        self.mount(self.active_mount)
    }

    /// Снять оружие с mount'а (None: mount пуст или индекс вне диапазона)
    pub fn drop_weapon(&mut self, index: usize) -> Option<WeaponMount> {
        self.mounts.get_mut(index).and_then(Option::take)
    }

    /// Поставить оружие в mount, вернуть true если индекс валиден
    pub fn assign_weapon(&mut self, index: usize, mount: WeaponMount) -> bool {
        match self.mounts.get_mut(index) {
            Some(slot) => {
                *slot = Some(mount);
                true
            }
            None => false,
        }
    }

    pub fn is_mount_empty(&self, index: usize) -> bool {
        self.mount(index).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_drop() {
        let mut inventory = Inventory::default();
        assert!(inventory.is_mount_empty(0));

        assert!(inventory.assign_weapon(0, WeaponMount::with_rounds("pistol_m9", 12)));
        assert_eq!(inventory.active_weapon().map(|m| m.in_gun_rounds), Some(12));

        let dropped = inventory.drop_weapon(0);
        assert_eq!(dropped, Some(WeaponMount::with_rounds("pistol_m9", 12)));
        assert!(inventory.is_mount_empty(0));
        assert_eq!(inventory.drop_weapon(0), None);
    }

    #[test]
    fn test_out_of_range_mount() {
        let mut inventory = Inventory::default();
        assert!(!inventory.assign_weapon(5, WeaponMount::new("machete")));
        assert_eq!(inventory.drop_weapon(5), None);
        assert!(inventory.mount(5).is_none());
    }
}
