//! Weapon module: data-only определения оружия + урон по дистанции
//!
//! ECS ответственность:
//! - WeaponCatalog: definitions (load-once, read-many)
//! - Damage model: attenuated damage/force по части тела и дистанции
//! - Events: WeaponHit (host → ECS) → DamageDealt (ECS → AI)
//!
//! Host ответственность: raycast/sphere cast ствола, анимации рук, VFX.

use bevy::prelude::*;

pub mod catalog;
pub mod definition;
pub mod hit;

#[cfg(test)]
mod hit_tests;

pub use catalog::{CatalogError, WeaponCatalog};
pub use definition::{
    AmmoDefinition, BodyPart, ReloadType, WeaponDefinition, WeaponDefinitionError,
    WeaponFeedType, WeaponHandedness,
};
pub use hit::{process_weapon_hits, DamageDealt, WeaponHit};

/// Weapon Plugin
///
/// Каталог вставляется только если host не загрузил свой (RON) до плагина.
pub struct WeaponPlugin;

impl Plugin for WeaponPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<WeaponCatalog>() {
            app.insert_resource(WeaponCatalog::builtin());
        }

        app.add_event::<WeaponHit>()
            .add_event::<DamageDealt>()
            .add_systems(
                Update,
                process_weapon_hits.in_set(crate::PlayerFrameSet::Weapons),
            );
    }
}
