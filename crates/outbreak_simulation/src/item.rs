//! Item identifiers
//!
//! Оружие, патроны и прочие предметы ссылаются друг на друга через `ItemId`
//! (ключ в `WeaponCatalog`), а не через прямые ссылки на данные.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Item identifier (unique string ID)
///
/// # Examples
/// - "pistol_m9"
/// - "ammo_9mm"
/// - "machete"
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
