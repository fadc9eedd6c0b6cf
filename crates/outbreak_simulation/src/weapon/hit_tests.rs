//! Tests for weapon hit processing.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::components::{AiBodyPart, Inventory, WeaponMount};
    use crate::weapon::{process_weapon_hits, BodyPart, DamageDealt, WeaponCatalog, WeaponHit};

    #[derive(Resource, Default)]
    struct Dealt(Vec<DamageDealt>);

    fn collect_damage(mut events: EventReader<DamageDealt>, mut dealt: ResMut<Dealt>) {
        dealt.0.extend(events.read().cloned());
    }

    fn create_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(WeaponCatalog::builtin())
            .init_resource::<Dealt>()
            .add_event::<WeaponHit>()
            .add_event::<DamageDealt>()
            .add_systems(Update, process_weapon_hits)
            .add_systems(PostUpdate, collect_damage);
        app
    }

    /// Стрелок с пистолетом + зомби с головой и телом
    fn spawn_shooter_and_zombie(app: &mut App) -> (Entity, Entity, Entity, Entity) {
        let mut inventory = Inventory::default();
        inventory.assign_weapon(0, WeaponMount::with_rounds("pistol_m9", 15));
        let shooter = app.world_mut().spawn(inventory).id();

        let zombie = app.world_mut().spawn_empty().id();
        let head = app.world_mut().spawn(AiBodyPart::head(zombie)).id();
        let body = app.world_mut().spawn(AiBodyPart::body(zombie)).id();

        (shooter, zombie, head, body)
    }

    fn hit(shooter: Entity, collider: Entity, distance: f32) -> WeaponHit {
        WeaponHit {
            shooter,
            collider,
            distance,
            point: Vec3::new(0.0, 1.6, -distance),
            direction: Vec3::NEG_Z,
        }
    }

    #[test]
    fn test_point_blank_head_and_body() {
        let mut app = create_test_app();
        let (shooter, zombie, head, body) = spawn_shooter_and_zombie(&mut app);

        app.world_mut().send_event(hit(shooter, head, 0.0));
        app.world_mut().send_event(hit(shooter, body, 0.0));
        app.update();

        let dealt = &app.world().resource::<Dealt>().0;
        assert_eq!(dealt.len(), 2);

        assert_eq!(dealt[0].target, zombie);
        assert_eq!(dealt[0].attacker, shooter);
        assert_eq!(dealt[0].body_part, BodyPart::Head);
        assert_eq!(dealt[0].damage, 100);

        assert_eq!(dealt[1].body_part, BodyPart::Body);
        assert_eq!(dealt[1].damage, 25);

        // force = direction × 80 (кривая = 1.0 в начале)
        assert!((dealt[0].force - Vec3::new(0.0, 0.0, -80.0)).length() < 1e-4);
    }

    #[test]
    fn test_beyond_range_uses_last_key() {
        let mut app = create_test_app();
        let (shooter, _zombie, head, body) = spawn_shooter_and_zombie(&mut app);

        // range 50m, кривая 1.0 → 0.4
        app.world_mut().send_event(hit(shooter, head, 120.0));
        app.world_mut().send_event(hit(shooter, body, 120.0));
        app.update();

        let dealt = &app.world().resource::<Dealt>().0;
        assert_eq!(dealt.len(), 2);
        assert_eq!(dealt[0].damage, 40);
        assert_eq!(dealt[1].damage, 10);
    }

    #[test]
    fn test_environment_hit_deals_no_damage() {
        let mut app = create_test_app();
        let (shooter, _zombie, _head, _body) = spawn_shooter_and_zombie(&mut app);
        let wall = app.world_mut().spawn(Transform::default()).id();

        app.world_mut().send_event(hit(shooter, wall, 3.0));
        app.update();

        assert!(app.world().resource::<Dealt>().0.is_empty());
    }

    #[test]
    fn test_self_hit_ignored() {
        let mut app = create_test_app();
        let (shooter, _zombie, _head, _body) = spawn_shooter_and_zombie(&mut app);
        let own_head = app.world_mut().spawn(AiBodyPart::head(shooter)).id();

        app.world_mut().send_event(hit(shooter, own_head, 0.5));
        app.update();

        assert!(app.world().resource::<Dealt>().0.is_empty());
    }

    #[test]
    fn test_no_active_weapon_no_damage() {
        let mut app = create_test_app();
        let (_shooter, _zombie, head, _body) = spawn_shooter_and_zombie(&mut app);
        let unarmed = app.world_mut().spawn(Inventory::default()).id();

        app.world_mut().send_event(hit(unarmed, head, 1.0));
        app.update();

        assert!(app.world().resource::<Dealt>().0.is_empty());
    }

    #[test]
    fn test_unknown_weapon_no_damage() {
        let mut app = create_test_app();
        let (_shooter, _zombie, head, _body) = spawn_shooter_and_zombie(&mut app);

        let mut inventory = Inventory::default();
        inventory.assign_weapon(0, WeaponMount::new("flamethrower"));
        let shooter = app.world_mut().spawn(inventory).id();

        app.world_mut().send_event(hit(shooter, head, 1.0));
        app.update();

        assert!(app.world().resource::<Dealt>().0.is_empty());
    }
}
