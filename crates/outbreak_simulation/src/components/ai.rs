//! AI body part colliders

use bevy::prelude::*;

use crate::weapon::BodyPart;

/// Коллайдер части тела AI (голова, торс)
///
/// Висит на отдельном entity-коллайдере; `owner` это сам AI актор,
/// которому уходит урон.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AiBodyPart {
    pub owner: Entity,
    pub part: BodyPart,
}

impl AiBodyPart {
    pub fn head(owner: Entity) -> Self {
        Self {
            owner,
            part: BodyPart::Head,
        }
    }

    pub fn body(owner: Entity) -> Self {
        Self {
            owner,
            part: BodyPart::Body,
        }
    }
}
