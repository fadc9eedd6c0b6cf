//! Headless симуляция OUTBREAK
//!
//! Игрок у двери, рядом зомби: Use → дверь, удар, зомби кусает до смерти игрока.
//! Физика луча: Rapier, остальное host делает через логи.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;

use outbreak_simulation::audio::{AudioClip, AudioCollection, PlaySound};
use outbreak_simulation::interaction::InteractiveActivated;
use outbreak_simulation::input::PlayerInput;
use outbreak_simulation::inventory::WeaponChanged;
use outbreak_simulation::physics::RapierInteractionPlugin;
use outbreak_simulation::player::{AiDamageRequest, GameOver, PlayerDamaged};
use outbreak_simulation::weapon::{DamageDealt, WeaponHit};
use outbreak_simulation::{
    create_headless_app, log_info, log_warning, spawn_player, AiBodyPart, Interactive,
    InteractionText, PlayerAudio, PlayerVitals, SimulationPlugin, WeaponCatalog, WeaponMount,
};

const CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/weapons.ron");

fn main() {
    let seed = 42;
    log_info(&format!("Starting OUTBREAK headless simulation (seed: {})", seed));

    let mut app = create_headless_app(seed);

    match WeaponCatalog::load(CATALOG_PATH) {
        Ok(catalog) => {
            log_info(&format!("Loaded {} weapons from '{}'", catalog.len(), CATALOG_PATH));
            app.insert_resource(catalog);
        }
        Err(e) => log_warning(&format!("Using builtin weapons: {}", e)),
    }

    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        SimulationPlugin,
        RapierInteractionPlugin,
    ))
    .add_systems(PostUpdate, host_event_log);

    let (player, zombie_head) = spawn_scene(app.world_mut());

    for tick in 0..400 {
        {
            let mut input = app.world_mut().resource_mut::<PlayerInput>();
            input.view_origin = Vec3::new(0.0, 1.6, 0.0);
            input.view_forward = Vec3::NEG_Z;
            input.use_pressed = tick == 10;
            input.attack_pressed = tick == 20;
            input.taunt_pressed = tick == 30;
        }

        if tick == 40 {
            app.world_mut().send_event(WeaponHit {
                shooter: player,
                collider: zombie_head,
                distance: 0.8,
                point: Vec3::new(0.0, 1.6, -0.8),
                direction: Vec3::NEG_Z,
            });
        }

        // Зомби кусает с 100 тика
        if tick >= 100 {
            app.world_mut().send_event(PlayerDamaged {
                entity: player,
                amount: 60.0,
                play_damage_sound: true,
                play_pain_sound: true,
            });
        }

        app.update();

        if tick % 100 == 0 {
            let health = app
                .world()
                .get::<PlayerVitals>(player)
                .map_or(0.0, |v| v.health);
            let text = app.world().resource::<InteractionText>().0.clone();
            log_info(&format!("Tick {}: health {:.1}, crosshair {:?}", tick, health, text));
        }
    }

    log_info("Simulation complete!");
}

fn spawn_scene(world: &mut World) -> (Entity, Entity) {
    let audio = PlayerAudio {
        damage_sounds: Some(AudioCollection::new(
            "Player",
            vec![AudioClip::new("hit_01", 0.3), AudioClip::new("hit_02", 0.4)],
        )),
        pain_sounds: Some(AudioCollection::new(
            "Player",
            vec![AudioClip::new("pain_01", 1.2), AudioClip::new("pain_02", 0.9)],
        )),
        taunt_sounds: Some(AudioCollection::new(
            "Player",
            vec![AudioClip::new("taunt_01", 2.0)],
        )),
    };

    let player = spawn_player(&mut world.commands(), Vec3::ZERO, audio);
    world.flush();

    world.send_event(WeaponChanged {
        entity: player,
        mount: WeaponMount::with_rounds("machete", 0),
    });

    // Дверь прямо перед камерой
    world.spawn((
        Transform::from_xyz(0.0, 1.6, -0.6),
        Collider::cuboid(0.5, 1.0, 0.05),
        Interactive::new(10, "Open Door"),
    ));

    // Зомби: голова в досягаемости melee
    let zombie = world.spawn(Transform::from_xyz(0.0, 0.0, -0.8)).id();
    let head = world
        .spawn((
            Transform::from_xyz(0.0, 1.6, -0.8),
            Collider::ball(0.15),
            AiBodyPart::head(zombie),
        ))
        .id();
    world.spawn((
        Transform::from_xyz(0.0, 1.0, -0.8),
        Collider::capsule_y(0.4, 0.25),
        AiBodyPart::body(zombie),
    ));

    (player, head)
}

/// Host stub: печатает то, что настоящий движок бы проиграл/показал
fn host_event_log(
    mut sounds: EventReader<PlaySound>,
    mut activated: EventReader<InteractiveActivated>,
    mut melee: EventReader<AiDamageRequest>,
    mut damage: EventReader<DamageDealt>,
    mut game_over: EventReader<GameOver>,
) {
    for sound in sounds.read() {
        log_info(&format!("[audio] {} (delay {:.2}s)", sound.clip, sound.delay));
    }
    for event in activated.read() {
        log_info(&format!("[world] {:?} activated {:?}", event.activator, event.item));
    }
    for event in melee.read() {
        log_info(&format!("[ai] melee {:?} for {}", event.target, event.damage));
    }
    for event in damage.read() {
        log_info(&format!("[ai] {:?} {:?} took {}", event.target, event.body_part, event.damage));
    }
    for event in game_over.read() {
        log_info(&format!("[menu] game over for {:?}, loading main menu", event.entity));
    }
}
