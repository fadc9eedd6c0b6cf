//! Player character module (FPS survival)
//!
//! ECS ответственность:
//! - Game state: PlayerVitals, таймеры (pain / attack / taunt / game over)
//! - Rules: урон × delta, кровь, радиус шума, drag limit, melee удар
//! - Events: PlayerDamaged / LevelCompleted (in), AiDamageRequest / PlaySound / GameOver (out)
//!
//! Host ответственность: FPS controller, камера, audio playback, HUD.

use bevy::prelude::*;

pub mod config;
pub mod events;
pub mod systems;


pub use config::PlayerConfig;
pub use events::*;
pub use systems::*;

use crate::components::{
    BloodEffect, Inventory, MovementModifiers, PlayerAudio, PlayerCharacter, PlayerVitals,
    SoundEmitter,
};
use crate::PlayerFrameSet;

/// Player Plugin
///
/// Порядок выполнения (Update):
/// 1. Input: setup_spawned_player
/// 2. Resolve: player_melee_attack
/// 3. Effects: update_sound_emitter → player_taunt (taunt перекрывает радиус)
/// 4. Damage: apply_player_damage → handle_level_complete → tick_game_over
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>()
            .add_event::<PlayerDamaged>()
            .add_event::<LevelCompleted>()
            .add_event::<AiDamageRequest>()
            .add_event::<PlayerDied>()
            .add_event::<GameOver>();

        app.add_systems(Update, setup_spawned_player.in_set(PlayerFrameSet::Input))
            .add_systems(Update, player_melee_attack.in_set(PlayerFrameSet::Resolve))
            .add_systems(
                Update,
                (update_sound_emitter, player_taunt)
                    .chain()
                    .in_set(PlayerFrameSet::Effects),
            )
            .add_systems(
                Update,
                (apply_player_damage, handle_level_complete, tick_game_over)
                    .chain()
                    .in_set(PlayerFrameSet::Damage),
            );
    }
}

/// Spawn helper: игрок со всеми компонентами
pub fn spawn_player(commands: &mut Commands, position: Vec3, audio: PlayerAudio) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            PlayerCharacter::default(),
            PlayerVitals::default(),
            MovementModifiers::default(),
            BloodEffect::default(),
            SoundEmitter::default(),
            Inventory::default(),
            audio,
        ))
        .id()
}
