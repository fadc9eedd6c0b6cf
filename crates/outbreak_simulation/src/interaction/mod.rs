//! Interaction module: что под прицелом игрока
//!
//! Каждый кадр:
//! 1. `update_crosshair_ray`: луч из позы камеры (PlayerInput)
//! 2. host / rapier backend заполняет `CrosshairHits`
//! 3. `resolve_interaction`: priority scan → `InteractionText`, Use → `InteractiveActivated`

use bevy::prelude::*;

pub mod priority;

pub use priority::{
    interaction_ray_length, select_priority_item, CrosshairHits, CrosshairRay, Interactive,
    RaycastHit,
};

use crate::components::PlayerCharacter;
use crate::input::PlayerInput;
use crate::{log, log_warning, PlayerFrameSet};

/// Длины лучей (метры)
#[derive(Resource, Debug, Clone, Copy)]
pub struct InteractionConfig {
    /// Луч при взгляде горизонтально
    pub min_ray_length: f32,
    /// Луч при взгляде строго вверх/вниз
    pub max_ray_length: f32,
    pub melee_reach: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            min_ray_length: 1.0,
            max_ray_length: 1.8,
            melee_reach: 1.0,
        }
    }
}

/// Текст подсказки под прицелом (None: ничего не показываем)
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionText(pub Option<String>);

/// Event: игрок активировал interactive item
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveActivated {
    pub item: Entity,
    pub activator: Entity,
}

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionConfig>()
            .init_resource::<InteractionText>()
            .init_resource::<CrosshairRay>()
            .init_resource::<CrosshairHits>()
            .add_event::<InteractiveActivated>()
            .add_systems(Update, update_crosshair_ray.in_set(PlayerFrameSet::Input))
            .add_systems(Update, resolve_interaction.in_set(PlayerFrameSet::Resolve));
    }
}

/// System: луч из центра экрана по позе камеры
pub fn update_crosshair_ray(
    input: Res<PlayerInput>,
    config: Res<InteractionConfig>,
    mut ray: ResMut<CrosshairRay>,
) {
    let direction = input.view_forward.normalize_or(Vec3::NEG_Z);

    *ray = CrosshairRay {
        origin: input.view_origin,
        direction,
        interaction_length: interaction_ray_length(
            direction,
            config.min_ray_length,
            config.max_ray_length,
        ),
        melee_length: config.melee_reach,
    };
}

/// System: priority scan попаданий
///
/// - Нет попаданий → текст очищается
/// - Есть item → его текст; Use в этом кадре → `InteractiveActivated`
/// - Попадания без interactive item → текст не трогаем
pub fn resolve_interaction(
    input: Res<PlayerInput>,
    hits: Res<CrosshairHits>,
    items: Query<&Interactive>,
    players: Query<Entity, With<PlayerCharacter>>,
    mut text: ResMut<InteractionText>,
    mut activated: EventWriter<InteractiveActivated>,
) {
    if hits.interactive.is_empty() {
        if text.0.is_some() {
            text.0 = None;
        }
        return;
    }

    let Some((item_entity, item)) = select_priority_item(&hits.interactive, |e| items.get(e).ok())
    else {
        return;
    };

    if text.0.as_deref() != Some(item.text.as_str()) {
        text.0 = Some(item.text.clone());
    }

    if input.use_pressed {
        let Ok(player) = players.single() else {
            log_warning(&format!(
                "Use on {:?} ignored: expected exactly one player",
                item_entity
            ));
            return;
        };

        log(&format!("Player {:?} activated {:?} ('{}')", player, item_entity, item.text));

        activated.write(InteractiveActivated {
            item: item_entity,
            activator: player,
        });
    }
}
