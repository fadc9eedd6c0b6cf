//! Interaction integration test
//!
//! Host подаёт попадания луча прицела через `CrosshairHits` (без физики),
//! проверяем priority scan, текст подсказки и активацию по Use.

use bevy::prelude::*;
use outbreak_simulation::input::PlayerInput;
use outbreak_simulation::interaction::InteractiveActivated;
use outbreak_simulation::*;

#[derive(Resource, Default)]
struct Activations(Vec<InteractiveActivated>);

fn collect_activations(
    mut events: EventReader<InteractiveActivated>,
    mut activations: ResMut<Activations>,
) {
    activations.0.extend(events.read().copied());
}

fn create_interaction_app() -> (App, Entity) {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin)
        .init_resource::<Activations>()
        .add_systems(PostUpdate, collect_activations);

    let player = spawn_player(
        &mut app.world_mut().commands(),
        Vec3::ZERO,
        PlayerAudio::default(),
    );
    app.world_mut().flush();
    app.update();

    (app, player)
}

fn spawn_item(app: &mut App, priority: i32, text: &str) -> Entity {
    app.world_mut().spawn(Interactive::new(priority, text)).id()
}

fn hit(entity: Entity, distance: f32) -> RaycastHit {
    RaycastHit {
        entity,
        point: Vec3::new(0.0, 1.6, -distance),
        distance,
    }
}

fn set_hits(app: &mut App, hits: Vec<RaycastHit>) {
    app.world_mut().resource_mut::<CrosshairHits>().interactive = hits;
}

fn text(app: &App) -> Option<String> {
    app.world().resource::<InteractionText>().0.clone()
}

/// Test: из трёх предметов (1, 5, 3) выбирается priority 5
#[test]
fn test_highest_priority_item_wins() {
    let (mut app, _player) = create_interaction_app();

    let crate_item = spawn_item(&mut app, 1, "Search Crate");
    let door = spawn_item(&mut app, 5, "Open Door");
    let note = spawn_item(&mut app, 3, "Read Note");

    set_hits(
        &mut app,
        vec![hit(crate_item, 0.4), hit(door, 0.9), hit(note, 1.2)],
    );
    app.update();

    assert_eq!(text(&app), Some("Open Door".to_string()));
}

/// Test: при равном priority остаётся первое (ближайшее) попадание
#[test]
fn test_equal_priority_keeps_first_hit() {
    let (mut app, _player) = create_interaction_app();

    let near = spawn_item(&mut app, 2, "Near Switch");
    let far = spawn_item(&mut app, 2, "Far Switch");

    set_hits(&mut app, vec![hit(near, 0.5), hit(far, 1.0)]);
    app.update();

    assert_eq!(text(&app), Some("Near Switch".to_string()));
}

/// Test: нет попаданий → текст очищается
#[test]
fn test_text_cleared_without_hits() {
    let (mut app, _player) = create_interaction_app();

    let door = spawn_item(&mut app, 1, "Open Door");
    set_hits(&mut app, vec![hit(door, 0.5)]);
    app.update();
    assert_eq!(text(&app), Some("Open Door".to_string()));

    set_hits(&mut app, Vec::new());
    app.update();
    assert_eq!(text(&app), None);
}

/// Test: попадания без Interactive компонента → текст не меняется
#[test]
fn test_non_interactive_hits_leave_text() {
    let (mut app, _player) = create_interaction_app();

    let door = spawn_item(&mut app, 1, "Open Door");
    set_hits(&mut app, vec![hit(door, 0.5)]);
    app.update();

    // Item потерял Interactive (дверь открылась), коллайдер ещё под прицелом
    app.world_mut().entity_mut(door).remove::<Interactive>();
    app.update();

    assert_eq!(text(&app), Some("Open Door".to_string()));
}

/// Test: Use активирует выбранный предмет ровно в кадре нажатия
#[test]
fn test_use_activates_selected_item() {
    let (mut app, player) = create_interaction_app();

    let lever = spawn_item(&mut app, 1, "Pull Lever");
    let door = spawn_item(&mut app, 4, "Open Door");
    set_hits(&mut app, vec![hit(lever, 0.3), hit(door, 0.8)]);

    app.world_mut().resource_mut::<PlayerInput>().use_pressed = true;
    app.update();
    // Без нажатия активации нет
    app.update();

    let activations = &app.world().resource::<Activations>().0;
    assert_eq!(
        activations,
        &vec![InteractiveActivated {
            item: door,
            activator: player,
        }]
    );
}

/// Test: луч взаимодействия длиннее при взгляде вверх/вниз
#[test]
fn test_crosshair_ray_follows_camera() {
    let (mut app, _player) = create_interaction_app();

    {
        let mut input = app.world_mut().resource_mut::<PlayerInput>();
        input.view_origin = Vec3::new(1.0, 1.6, 2.0);
        input.view_forward = Vec3::new(0.0, 0.0, -2.0);
    }
    app.update();

    let ray = *app.world().resource::<CrosshairRay>();
    assert_eq!(ray.origin, Vec3::new(1.0, 1.6, 2.0));
    assert_eq!(ray.direction, Vec3::NEG_Z);
    assert!((ray.interaction_length - 1.0).abs() < 1e-5);
    assert!((ray.melee_length - 1.0).abs() < 1e-5);

    app.world_mut().resource_mut::<PlayerInput>().view_forward = Vec3::NEG_Y;
    app.update();

    let ray = *app.world().resource::<CrosshairRay>();
    assert!((ray.interaction_length - 1.8).abs() < 1e-5);
}

/// Test: без игрока Use ничего не активирует, подсказка всё равно показывается
#[test]
fn test_use_without_player_is_ignored() {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin)
        .init_resource::<Activations>()
        .add_systems(PostUpdate, collect_activations);
    app.update();

    let door = spawn_item(&mut app, 1, "Open Door");
    set_hits(&mut app, vec![hit(door, 0.5)]);

    app.world_mut().resource_mut::<PlayerInput>().use_pressed = true;
    app.update();

    assert_eq!(text(&app), Some("Open Door".to_string()));
    assert!(app.world().resource::<Activations>().0.is_empty());
}
