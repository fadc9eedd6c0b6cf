//! Weapon definition: статические данные оружия
//!
//! **WeaponDefinition**: immutable blueprint:
//! - Хранится в `WeaponCatalog` resource
//! - Создаётся hardcoded (`WeaponCatalog::default()`) или из RON
//!
//! Урон и сила удара ослабевают с дистанцией через `AttenuationCurve`:
//! `value = curve(clamp(distance / range, 0, 1)) × base`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curve::AttenuationCurve;
use crate::item::ItemId;

use super::catalog::WeaponCatalog;

/// Одноручное или двуручное оружие (определяет mount на персонаже)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum WeaponHandedness {
    #[default]
    SingleHanded,
    TwoHanded,
}

impl WeaponHandedness {
    /// Mount index: 0: single handed, 1: two handed
    pub fn mount_index(self) -> usize {
        match self {
            WeaponHandedness::SingleHanded => 0,
            WeaponHandedness::TwoHanded => 1,
        }
    }
}

/// Чем "питается" оружие
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum WeaponFeedType {
    #[default]
    None,
    Melee,
    Ammunition,
}

/// Тип перезарядки
///
/// - `Partial`: патроны досылаются по одному, ёмкость = `ammo_capacity` оружия
/// - `NonPartial`: смена магазина, ёмкость = `capacity` патронного предмета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum ReloadType {
    #[default]
    None,
    Partial,
    NonPartial,
}

/// Часть тела цели, по которой пришёлся удар
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    #[default]
    Body,
}

impl BodyPart {
    /// Разбор тега коллайдера: "Head" → Head, всё остальное → Body
    pub fn from_tag(tag: &str) -> Self {
        if tag == "Head" {
            BodyPart::Head
        } else {
            BodyPart::Body
        }
    }
}

/// Патронный предмет
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct AmmoDefinition {
    pub id: ItemId,
    pub name: String,
    /// Патронов в магазине/коробке
    pub capacity: i32,
}

/// Ошибки валидации authored данных оружия
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeaponDefinitionError {
    #[error("accuracy {0} is outside [0, 1]")]
    AccuracyOutOfRange(f32),
    #[error("range {0} is negative")]
    NegativeRange(f32),
    #[error("ray radius {0} is negative")]
    NegativeRayRadius(f32),
    #[error("non-partial reload requires an ammo item")]
    MissingAmmo,
    #[error("attenuation curve has negative value {0}")]
    NegativeAttenuation(f32),
}

/// Static weapon definition (blueprint)
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponDefinition {
    pub id: ItemId,
    pub name: String,

    pub weapon_type: WeaponHandedness,
    pub feed_type: WeaponFeedType,

    /// Какой патронный предмет использует оружие
    pub ammo: Option<ItemId>,
    /// Ёмкость для `ReloadType::Partial`
    pub ammo_capacity: i32,
    pub reload_type: ReloadType,

    /// Максимальная дальность (метры)
    pub range: f32,
    /// Точность [0, 1]
    pub accuracy: f32,
    /// Стрельба очередью при зажатой кнопке
    pub auto_fire: bool,
    /// Второй режим огня (прицел)
    pub dual_mode: bool,

    // === Damage ===
    /// Толщина луча: 0: обычный raycast, >0: sphere cast (дробовик)
    pub ray_radius: f32,
    pub head_damage: i32,
    pub body_damage: i32,
    pub damage_attenuation: AttenuationCurve,
    pub force: f32,
    pub force_attenuation: AttenuationCurve,

    /// Индекс sub-state machine FPS рук (-1 = нет)
    pub weapon_anim: i32,
}

impl Default for WeaponDefinition {
    fn default() -> Self {
        Self {
            id: ItemId::from(""),
            name: String::new(),
            weapon_type: WeaponHandedness::SingleHanded,
            feed_type: WeaponFeedType::None,
            ammo: None,
            ammo_capacity: 0,
            reload_type: ReloadType::None,
            range: 0.0,
            accuracy: 1.0,
            auto_fire: false,
            dual_mode: false,
            ray_radius: 0.0,
            head_damage: 100,
            body_damage: 20,
            damage_attenuation: AttenuationCurve::default(),
            force: 100.0,
            force_attenuation: AttenuationCurve::default(),
            weapon_anim: -1,
        }
    }
}

impl WeaponDefinition {
    /// Максимальная ёмкость оружия с учётом типа перезарядки
    ///
    /// - `None` → 0
    /// - `Partial` → `ammo_capacity` самого оружия
    /// - `NonPartial` → ёмкость патронного предмета, -1 если он не найден
    pub fn ammo_capacity(&self, catalog: &WeaponCatalog) -> i32 {
        match self.reload_type {
            ReloadType::None => 0,
            ReloadType::Partial => self.ammo_capacity,
            ReloadType::NonPartial => self
                .ammo
                .as_ref()
                .and_then(|id| catalog.ammo(id))
                .map_or(-1, |ammo| ammo.capacity),
        }
    }

    /// Дистанция → [0, 1] относительно `range`
    ///
    /// range <= 0: любая положительная дистанция считается "за пределом".
    pub fn normalized_distance(&self, distance: f32) -> f32 {
        if self.range <= 0.0 {
            return if distance > 0.0 { 1.0 } else { 0.0 };
        }
        (distance / self.range).clamp(0.0, 1.0)
    }

    /// Урон по части тела на дистанции (метры)
    pub fn attenuated_damage(&self, body_part: BodyPart, distance: f32) -> i32 {
        let base = match body_part {
            BodyPart::Head => self.head_damage,
            BodyPart::Body => self.body_damage,
        };
        let multiplier = self.damage_attenuation.evaluate(self.normalized_distance(distance));
        (multiplier * base as f32).floor() as i32
    }

    /// Сила удара на дистанции (метры)
    pub fn attenuated_force(&self, distance: f32) -> f32 {
        if self.force == 0.0 {
            return 0.0;
        }
        self.force_attenuation.evaluate(self.normalized_distance(distance)) * self.force
    }

    pub fn is_melee(&self) -> bool {
        self.feed_type == WeaponFeedType::Melee
    }

    pub fn uses_sphere_cast(&self) -> bool {
        self.ray_radius > 0.0
    }

    pub fn validate(&self) -> Result<(), WeaponDefinitionError> {
        if !(0.0..=1.0).contains(&self.accuracy) {
            return Err(WeaponDefinitionError::AccuracyOutOfRange(self.accuracy));
        }
        if self.range < 0.0 {
            return Err(WeaponDefinitionError::NegativeRange(self.range));
        }
        if self.ray_radius < 0.0 {
            return Err(WeaponDefinitionError::NegativeRayRadius(self.ray_radius));
        }
        if self.reload_type == ReloadType::NonPartial && self.ammo.is_none() {
            return Err(WeaponDefinitionError::MissingAmmo);
        }
        // Множитель урона/силы не бывает отрицательным
        let negative = self
            .damage_attenuation
            .keys()
            .iter()
            .chain(self.force_attenuation.keys())
            .map(|k| k.value)
            .find(|v| *v < 0.0);
        if let Some(value) = negative {
            return Err(WeaponDefinitionError::NegativeAttenuation(value));
        }
        Ok(())
    }
}
