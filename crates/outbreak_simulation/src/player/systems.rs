//! Player systems
//!
//! # Systems
//!
//! **Frame (Resolve / Effects):**
//! - `player_melee_attack`: удар по AI под прицелом
//! - `update_sound_emitter`: радиус шума + drag limit
//! - `player_taunt`: крик, привлекающий AI
//!
//! **Damage:**
//! - `apply_player_damage`: урон, кровь, звуки, смерть
//! - `handle_level_complete`, `tick_game_over`

use bevy::prelude::*;

use crate::audio::PlaySound;
use crate::components::{
    AiBodyPart, BloodEffect, MoveStatus, MovementModifiers, PlayerAudio, PlayerCharacter,
    PlayerVitals, SoundEmitter, MAX_HEALTH,
};
use crate::hud::{CursorState, ScreenFade, ScreenFadeType};
use crate::input::PlayerInput;
use crate::interaction::{CrosshairHits, CrosshairRay};
use crate::{log, log_info, DeterministicRng};

use super::config::PlayerConfig;
use super::events::*;

/// Радиус шума игрока
///
/// База: max(walk, (100 - health) / blood_radius_scale), затем landing/running поднимают минимум.
pub fn sound_emitter_radius(config: &PlayerConfig, health: f32, status: MoveStatus) -> f32 {
    let radius = config
        .walk_radius
        .max((MAX_HEALTH - health) / config.blood_radius_scale);

    match status {
        MoveStatus::Landing => radius.max(config.landing_radius),
        MoveStatus::Running => radius.max(config.run_radius),
        _ => radius,
    }
}

pub fn drag_multiplier_limit(config: &PlayerConfig, health: f32) -> f32 {
    (health / MAX_HEALTH).max(config.min_drag_multiplier_limit)
}

// ============================================================================
// Spawn
// ============================================================================

/// System: новый игрок → захват курсора + fade in
pub fn setup_spawned_player(
    spawned: Query<Entity, Added<PlayerCharacter>>,
    config: Res<PlayerConfig>,
    mut cursor: ResMut<CursorState>,
    mut fades: EventWriter<ScreenFade>,
) {
    for entity in spawned.iter() {
        *cursor = CursorState::captured();
        fades.write(ScreenFade {
            duration: config.fade_in_duration,
            fade_type: ScreenFadeType::FadeIn,
        });

        log_info(&format!("Player {:?} spawned", entity));
    }
}

// ============================================================================
// Melee
// ============================================================================

/// System: melee удар по ближайшей части тела AI в пределах досягаемости
///
/// Пауза `attack_interval` начинается только после попадания.
pub fn player_melee_attack(
    input: Res<PlayerInput>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    ray: Res<CrosshairRay>,
    hits: Res<CrosshairHits>,
    body_parts: Query<&AiBodyPart>,
    mut players: Query<(Entity, &mut PlayerCharacter)>,
    mut requests: EventWriter<AiDamageRequest>,
) {
    if !input.attack_pressed {
        return;
    }

    let Ok((entity, mut player)) = players.single_mut() else {
        return;
    };

    let now = time.elapsed_secs();
    if player.dead || now <= player.next_attack_time {
        return;
    }

    let Some(hit) = hits
        .body_parts
        .iter()
        .filter(|hit| hit.distance <= ray.melee_length)
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
    else {
        return;
    };

    let Ok(part) = body_parts.get(hit.entity) else {
        return;
    };

    requests.write(AiDamageRequest {
        attacker: entity,
        target: part.owner,
        body_part_collider: hit.entity,
        body_part: part.part,
        point: hit.point,
        force: ray.direction * config.melee_force,
        damage: config.melee_damage,
    });
    player.next_attack_time = now + config.attack_interval;

    log(&format!("Player melee hit {:?} ({:?})", part.owner, part.part));
}

// ============================================================================
// Sound emitter / taunt
// ============================================================================

/// System: радиус шума и drag limit от здоровья и статуса движения
pub fn update_sound_emitter(
    config: Res<PlayerConfig>,
    mut players: Query<
        (&PlayerVitals, &mut MovementModifiers, &mut SoundEmitter),
        With<PlayerCharacter>,
    >,
) {
    for (vitals, mut modifiers, mut emitter) in players.iter_mut() {
        emitter.radius = sound_emitter_radius(&config, vitals.health, modifiers.status);
        modifiers.drag_multiplier_limit = drag_multiplier_limit(&config, vitals.health);
    }
}

/// System: taunt (правая кнопка): первый клип коллекции, шум до `taunt_radius`
pub fn player_taunt(
    input: Res<PlayerInput>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut players: Query<(
        &mut PlayerCharacter,
        &PlayerAudio,
        Option<&mut SoundEmitter>,
        Option<&Transform>,
    )>,
    mut sounds: EventWriter<PlaySound>,
) {
    if !input.taunt_pressed {
        return;
    }

    let now = time.elapsed_secs();

    for (mut player, audio, emitter, transform) in players.iter_mut() {
        let Some(taunts) = &audio.taunt_sounds else {
            continue;
        };
        if now < player.next_taunt_time {
            continue;
        }
        let Some(clip) = taunts.clip(0) else {
            continue;
        };

        let position = transform.map_or(Vec3::ZERO, |t| t.translation);
        sounds.write(PlaySound::one_shot(taunts, clip, position));

        if let Some(mut emitter) = emitter {
            emitter.radius = config.taunt_radius;
        }
        player.next_taunt_time = now + clip.length;
    }
}

// ============================================================================
// Damage / death
// ============================================================================

/// System: урон игроку
///
/// 1. health -= amount × delta (не ниже 0)
/// 2. drag multiplier → 0, кровь на экране
/// 3. damage звук / pain звук (pain не чаще длины клипа, с задержкой)
/// 4. health == 0 → смерть (один раз)
pub fn apply_player_damage(
    mut events: EventReader<PlayerDamaged>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut players: Query<(
        &mut PlayerCharacter,
        &mut PlayerVitals,
        Option<&mut MovementModifiers>,
        Option<&mut BloodEffect>,
        Option<&PlayerAudio>,
        Option<&Transform>,
    )>,
    mut sounds: EventWriter<PlaySound>,
    mut died: EventWriter<PlayerDied>,
) {
    let now = time.elapsed_secs();
    let delta = time.delta_secs();

    for event in events.read() {
        let Ok((mut player, mut vitals, mut modifiers, blood, audio, transform)) =
            players.get_mut(event.entity)
        else {
            continue;
        };

        if player.dead {
            continue;
        }

        vitals.take_damage(event.amount, delta);

        if let Some(modifiers) = modifiers.as_mut() {
            modifiers.drag_multiplier = 0.0;
        }
        if let Some(mut blood) = blood {
            blood.apply_health(vitals.health);
        }

        let position = transform.map_or(Vec3::ZERO, |t| t.translation);

        if let Some(audio) = audio {
            if event.play_damage_sound {
                if let Some(collection) = &audio.damage_sounds {
                    if let Some(clip) = collection.random_clip(&mut rng.rng) {
                        sounds.write(PlaySound::one_shot(collection, clip, position));
                    }
                }
            }

            if event.play_pain_sound && player.pain_sound_ready(now) {
                if let Some(collection) = &audio.pain_sounds {
                    if let Some(clip) = collection.random_clip(&mut rng.rng) {
                        player.next_pain_sound_time = now + clip.length;
                        sounds.write(
                            PlaySound::one_shot(collection, clip, position)
                                .delayed(config.pain_sound_offset),
                        );
                    }
                }
            }
        }

        if !vitals.is_alive() {
            player.dead = true;
            if let Some(modifiers) = modifiers.as_mut() {
                modifiers.freeze_movement = true;
            }
            player.schedule_game_over(now, config.death_game_over_delay);
            died.write(PlayerDied {
                entity: event.entity,
            });

            log_info(&format!("Player {:?} died", event.entity));
        }
    }
}

/// System: конец уровня → заморозка + game over через `level_complete_game_over_delay`
pub fn handle_level_complete(
    mut events: EventReader<LevelCompleted>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut players: Query<(&mut PlayerCharacter, Option<&mut MovementModifiers>)>,
) {
    let now = time.elapsed_secs();

    for event in events.read() {
        let Ok((mut player, modifiers)) = players.get_mut(event.entity) else {
            continue;
        };

        if let Some(mut modifiers) = modifiers {
            modifiers.freeze_movement = true;
        }
        player.schedule_game_over(now, config.level_complete_game_over_delay);

        log_info(&format!("Level complete for {:?}", event.entity));
    }
}

/// System: запланированный game over → курсор свободен, host грузит меню
pub fn tick_game_over(
    time: Res<Time>,
    mut players: Query<(Entity, &mut PlayerCharacter)>,
    mut cursor: ResMut<CursorState>,
    mut game_over: EventWriter<GameOver>,
) {
    let now = time.elapsed_secs();

    for (entity, mut player) in players.iter_mut() {
        let Some(at) = player.game_over_at else {
            continue;
        };
        if now < at {
            continue;
        }

        player.game_over_at = None;
        *cursor = CursorState::free();
        game_over.write(GameOver { entity });

        log_info(&format!("Game over for {:?}", entity));
    }
}
