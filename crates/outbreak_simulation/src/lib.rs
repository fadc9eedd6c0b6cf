//! OUTBREAK Simulation Core
//!
//! ECS-симуляция игрока FPS survival/horror на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state + rules (здоровье, урон, priority scan, инвентарь)
//! - Host engine = physics queries, input, rendering, audio playback, UI
//!
//! Host → ECS: `PlayerInput`, `CrosshairHits`, события (WeaponHit, PlayerDamaged, ...)
//! ECS → host: `InteractionText`, `CursorState`, `HudState`, события (PlaySound, GameOver, ...)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

pub mod audio;
pub mod components;
pub mod curve;
pub mod hud;
pub mod input;
pub mod interaction;
pub mod inventory;
pub mod item;
pub mod logger;
pub mod physics;
pub mod player;
pub mod weapon;

pub use components::*;
pub use curve::{AttenuationCurve, Keyframe};
pub use interaction::{
    CrosshairHits, CrosshairRay, Interactive, InteractionPlugin, InteractionText, RaycastHit,
};
pub use inventory::{InventoryPlugin, InventoryScreen};
pub use item::ItemId;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use player::{spawn_player, PlayerConfig, PlayerPlugin};
pub use weapon::{BodyPart, WeaponCatalog, WeaponDefinition, WeaponPlugin};

/// Порядок кадра игрока (Update)
///
/// `Resolve` и `Effects` пропускаются в кадре, когда открылся инвентарь.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerFrameSet {
    /// Input snapshot → луч, inventory toggle, смена оружия
    Input,
    /// Host / rapier заполняет CrosshairHits
    Raycast,
    /// Priority scan, melee
    Resolve,
    /// Радиус шума, taunt
    Effects,
    /// Урон игроку, смерть, game over
    Damage,
    /// Попадания оружия → DamageDealt
    Weapons,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                PlayerFrameSet::Input,
                PlayerFrameSet::Raycast,
                PlayerFrameSet::Resolve,
                PlayerFrameSet::Effects,
                PlayerFrameSet::Damage,
                PlayerFrameSet::Weapons,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            PlayerFrameSet::Resolve.run_if(inventory::inventory_not_opening),
        )
        .configure_sets(
            Update,
            PlayerFrameSet::Effects.run_if(inventory::inventory_not_opening),
        );

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.init_resource::<input::PlayerInput>()
            .init_resource::<hud::CursorState>()
            .init_resource::<hud::HudState>()
            .add_event::<audio::PlaySound>()
            .add_event::<hud::ScreenFade>()
            .add_plugins((WeaponPlugin, InventoryPlugin, InteractionPlugin, PlayerPlugin))
            .add_systems(Last, input::clear_input_presses);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Шаг времени headless симуляции (60 кадров в секунду)
pub const FRAME_DURATION: Duration = Duration::from_nanos(16_666_667);

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается фиксированным шагом `FRAME_DURATION` на каждый `app.update()`
/// (детерминизм не зависит от wall clock). Первый кадр имеет delta = 0.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME_DURATION))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}
