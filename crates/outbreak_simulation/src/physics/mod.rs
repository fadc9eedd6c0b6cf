//! Rapier backend для crosshair луча
//!
//! Опционально: host с собственной физикой заполняет `CrosshairHits` сам,
//! headless сборка с Rapier подключает `RapierInteractionPlugin`.
//! Сам `RapierPhysicsPlugin` добавляет приложение, не этот плагин.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::AiBodyPart;
use crate::interaction::{CrosshairHits, CrosshairRay, Interactive, RaycastHit};
use crate::PlayerFrameSet;

pub struct RapierInteractionPlugin;

impl Plugin for RapierInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            cast_crosshair_rays.in_set(PlayerFrameSet::Raycast),
        );
    }
}

/// System: RaycastAll по interactive слою и по частям тела AI
///
/// Попадания сортируются по дистанции (ближний = "первый встреченный").
pub fn cast_crosshair_rays(
    rapier_context: ReadRapierContext,
    ray: Res<CrosshairRay>,
    interactives: Query<(), With<Interactive>>,
    body_parts: Query<(), With<AiBodyPart>>,
    mut hits: ResMut<CrosshairHits>,
) {
    hits.clear();

    let Ok(context) = rapier_context.single() else {
        return;
    };

    let is_interactive = |entity: Entity| interactives.contains(entity);
    let is_body_part = |entity: Entity| body_parts.contains(entity);

    hits.interactive = collect_hits(
        &context,
        &ray,
        ray.interaction_length,
        QueryFilter::default().predicate(&is_interactive),
    );
    hits.body_parts = collect_hits(
        &context,
        &ray,
        ray.melee_length,
        QueryFilter::default().predicate(&is_body_part),
    );
}

fn collect_hits(
    context: &RapierContext,
    ray: &CrosshairRay,
    max_distance: f32,
    filter: QueryFilter,
) -> Vec<RaycastHit> {
    let mut found = Vec::new();

    context.intersect_ray(
        ray.origin,
        ray.direction,
        max_distance,
        true,
        filter,
        |entity, intersection| {
            found.push(RaycastHit {
                entity,
                point: intersection.point,
                distance: intersection.time_of_impact,
            });
            true
        },
    );

    found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    found
}
