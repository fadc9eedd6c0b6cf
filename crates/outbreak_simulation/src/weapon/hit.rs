//! Weapon hits → damage
//!
//! Host (physics) сообщает попадание луча оружия в коллайдер → ECS находит
//! активное оружие стрелка, часть тела цели и считает ослабленный урон/силу.

use bevy::prelude::*;

use crate::components::{AiBodyPart, Inventory};
use crate::{log, log_warning};

use super::catalog::WeaponCatalog;
use super::definition::BodyPart;

/// Event: луч оружия попал в коллайдер (host → ECS)
#[derive(Event, Debug, Clone)]
pub struct WeaponHit {
    /// Кто стрелял
    pub shooter: Entity,
    /// Коллайдер, в который попали
    pub collider: Entity,
    /// Дистанция от ствола до точки попадания (метры)
    pub distance: f32,
    pub point: Vec3,
    /// Направление луча
    pub direction: Vec3,
}

/// Event: урон нанесён AI (ECS → AI layer)
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    /// Владелец части тела (AI entity)
    pub target: Entity,
    pub body_part: BodyPart,
    pub damage: i32,
    pub point: Vec3,
    /// direction × attenuated force
    pub force: Vec3,
}

/// System: обработка WeaponHit → DamageDealt
pub fn process_weapon_hits(
    mut hits: EventReader<WeaponHit>,
    shooters: Query<&Inventory>,
    body_parts: Query<&AiBodyPart>,
    catalog: Res<WeaponCatalog>,
    mut damage_events: EventWriter<DamageDealt>,
) {
    for hit in hits.read() {
        // Попали в окружение: урона нет
        let Ok(part) = body_parts.get(hit.collider) else {
            continue;
        };

        if part.owner == hit.shooter {
            log_warning(&format!("Shooter {:?} hit own body part, ignored", hit.shooter));
            continue;
        }

        let Some(mount) = shooters.get(hit.shooter).ok().and_then(|inv| inv.active_weapon()) else {
            log_warning(&format!("WeaponHit from {:?} without active weapon", hit.shooter));
            continue;
        };

        let Some(weapon) = catalog.weapon(&mount.weapon) else {
            log_warning(&format!("Unknown weapon '{}'", mount.weapon));
            continue;
        };

        let damage = weapon.attenuated_damage(part.part, hit.distance);
        let force = hit.direction.normalize_or_zero() * weapon.attenuated_force(hit.distance);

        log(&format!(
            "{} hit {:?} ({:?}) at {:.1}m for {} damage",
            weapon.name, part.owner, part.part, hit.distance, damage
        ));

        damage_events.write(DamageDealt {
            attacker: hit.shooter,
            target: part.owner,
            body_part: part.part,
            damage,
            point: hit.point,
            force,
        });
    }
}
