//! WeaponCatalog: lookup table оружия и патронов (Resource)
//!
//! Load-once, read-many. Источник: hardcoded `builtin()` или RON файл:
//!
//! ```ron
//! (
//!     ammo: [(id: "ammo_9mm", name: "9mm Rounds", capacity: 15)],
//!     weapons: [(id: "pistol_m9", name: "M9", range: 50.0, ammo: Some("ammo_9mm"))],
//! )
//! ```

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::curve::{AttenuationCurve, Keyframe};
use crate::item::ItemId;

use super::definition::{
    AmmoDefinition, ReloadType, WeaponDefinition, WeaponDefinitionError, WeaponFeedType,
    WeaponHandedness,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("duplicate item id '{0}'")]
    DuplicateId(ItemId),
    #[error("weapon '{id}' is invalid: {source}")]
    InvalidWeapon {
        id: ItemId,
        #[source]
        source: WeaponDefinitionError,
    },
    #[error("weapon '{weapon}' references unknown ammo '{ammo}'")]
    UnknownAmmo { weapon: ItemId, ammo: ItemId },
}

/// RON layout файла каталога
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    ammo: Vec<AmmoDefinition>,
    #[serde(default)]
    weapons: Vec<WeaponDefinition>,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct WeaponCatalog {
    weapons: HashMap<ItemId, WeaponDefinition>,
    ammo: HashMap<ItemId, AmmoDefinition>,
}

impl WeaponCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weapon(&self, id: &ItemId) -> Option<&WeaponDefinition> {
        self.weapons.get(id)
    }

    pub fn ammo(&self, id: &ItemId) -> Option<&AmmoDefinition> {
        self.ammo.get(id)
    }

    pub fn add_weapon(&mut self, definition: WeaponDefinition) {
        self.weapons.insert(definition.id.clone(), definition);
    }

    pub fn add_ammo(&mut self, definition: AmmoDefinition) {
        self.ammo.insert(definition.id.clone(), definition);
    }

    pub fn weapon_ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<_> = self.weapons.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Парсит RON и валидирует каждое оружие
    pub fn from_ron_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = ron::from_str(source)?;
        let mut catalog = Self::new();

        for ammo in file.ammo {
            if catalog.ammo.contains_key(&ammo.id) {
                return Err(CatalogError::DuplicateId(ammo.id));
            }
            catalog.add_ammo(ammo);
        }

        for weapon in file.weapons {
            if catalog.weapons.contains_key(&weapon.id) || catalog.ammo.contains_key(&weapon.id) {
                return Err(CatalogError::DuplicateId(weapon.id));
            }
            weapon.validate().map_err(|source| CatalogError::InvalidWeapon {
                id: weapon.id.clone(),
                source,
            })?;
            if let Some(ammo) = &weapon.ammo {
                if !catalog.ammo.contains_key(ammo) {
                    return Err(CatalogError::UnknownAmmo {
                        weapon: weapon.id.clone(),
                        ammo: ammo.clone(),
                    });
                }
            }
            catalog.add_weapon(weapon);
        }

        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Hardcoded каталог (базовый набор оружия)
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        // === AMMO ===
        catalog.add_ammo(AmmoDefinition {
            id: "ammo_9mm".into(),
            name: "9mm Rounds".to_string(),
            capacity: 15,
        });
        catalog.add_ammo(AmmoDefinition {
            id: "ammo_12gauge".into(),
            name: "12 Gauge Shells".to_string(),
            capacity: 8,
        });
        catalog.add_ammo(AmmoDefinition {
            id: "ammo_762".into(),
            name: "7.62mm Magazine".to_string(),
            capacity: 30,
        });

        // === WEAPONS ===

        // Pistol: магазин, слабое падение урона
        catalog.add_weapon(WeaponDefinition {
            id: "pistol_m9".into(),
            name: "M9 Pistol".to_string(),
            weapon_type: WeaponHandedness::SingleHanded,
            feed_type: WeaponFeedType::Ammunition,
            ammo: Some("ammo_9mm".into()),
            reload_type: ReloadType::NonPartial,
            range: 50.0,
            accuracy: 0.85,
            head_damage: 100,
            body_damage: 25,
            damage_attenuation: AttenuationCurve::linear(1.0, 0.4),
            force: 80.0,
            force_attenuation: AttenuationCurve::linear(1.0, 0.2),
            weapon_anim: 1,
            ..Default::default()
        });

        // Shotgun: патроны по одному, толстый луч, резкое падение урона
        catalog.add_weapon(WeaponDefinition {
            id: "shotgun_pump".into(),
            name: "Pump Shotgun".to_string(),
            weapon_type: WeaponHandedness::TwoHanded,
            feed_type: WeaponFeedType::Ammunition,
            ammo: Some("ammo_12gauge".into()),
            ammo_capacity: 6,
            reload_type: ReloadType::Partial,
            range: 20.0,
            accuracy: 0.6,
            ray_radius: 0.3,
            head_damage: 150,
            body_damage: 70,
            damage_attenuation: AttenuationCurve::new(vec![
                Keyframe::new(0.0, 1.0),
                Keyframe::new(0.3, 0.9),
                Keyframe::new(1.0, 0.05),
            ]),
            force: 400.0,
            force_attenuation: AttenuationCurve::ease_in_out(1.0, 0.0),
            weapon_anim: 2,
            ..Default::default()
        });

        // Rifle: авто-огонь, режим прицела
        catalog.add_weapon(WeaponDefinition {
            id: "rifle_ak".into(),
            name: "Assault Rifle".to_string(),
            weapon_type: WeaponHandedness::TwoHanded,
            feed_type: WeaponFeedType::Ammunition,
            ammo: Some("ammo_762".into()),
            reload_type: ReloadType::NonPartial,
            range: 150.0,
            accuracy: 0.75,
            auto_fire: true,
            dual_mode: true,
            head_damage: 100,
            body_damage: 35,
            damage_attenuation: AttenuationCurve::linear(1.0, 0.6),
            force: 150.0,
            force_attenuation: AttenuationCurve::linear(1.0, 0.5),
            weapon_anim: 3,
            ..Default::default()
        });

        // Machete: melee, без патронов
        catalog.add_weapon(WeaponDefinition {
            id: "machete".into(),
            name: "Machete".to_string(),
            weapon_type: WeaponHandedness::SingleHanded,
            feed_type: WeaponFeedType::Melee,
            reload_type: ReloadType::None,
            range: 1.5,
            head_damage: 80,
            body_damage: 40,
            damage_attenuation: AttenuationCurve::constant(1.0),
            force: 50.0,
            force_attenuation: AttenuationCurve::constant(1.0),
            weapon_anim: 0,
            ..Default::default()
        });

        catalog
    }
}
