use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::common::{
    layers::Layer,
    play_area::PlayArea,
    test_utils::{run_system_once, time_with_delta},
    tunables::Tunables,
};
use crate::plugins::motion::Motion;
use super::*;

fn monster_count(world: &mut World) -> usize {
    world.query::<&Monster>().iter(world).count()
}

#[test]
fn launch_stays_inside_vertical_bounds() {
    let area = PlayArea::new(400.0, 600.0);
    let size = Vec2::new(40.0, 60.0);
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..10_000 {
        let l = plan_monster(&area, size, 2.0..=4.0, &mut rng);
        assert!(l.start.y >= 30.0 && l.start.y <= 570.0, "y = {}", l.start.y);
        assert!((2.0..=4.0).contains(&l.duration), "duration = {}", l.duration);
        assert_eq!(l.start.x, 420.0);
        assert_eq!(l.destination, Vec2::new(-20.0, l.start.y));
    }
}

#[test]
fn launch_centres_when_area_is_too_short() {
    let area = PlayArea::new(400.0, 20.0);
    let mut rng = StdRng::seed_from_u64(1);
    let l = plan_monster(&area, Vec2::splat(40.0), 3.0..=3.0, &mut rng);
    assert_eq!(l.start.y, 10.0);
    assert_eq!(l.duration, 3.0);
}

#[test]
fn opening_monster_is_a_tagged_moving_sensor() {
    let mut world = World::new();
    world.insert_resource(PlayArea::new(400.0, 600.0));
    world.insert_resource(Tunables::default());

    run_system_once(&mut world, super::spawn_opening_monster);

    let mut q = world.query::<(&Monster, &Motion, &CollisionLayers, &Sensor)>();
    let (_, motion, layers, _) = q.single(&world).unwrap();
    assert!(layers.memberships.has_all(Layer::Monster));
    assert!(layers.filters.has_all(Layer::Projectile));
    assert!((2.0..=4.0).contains(&motion.duration));
    assert!(motion.start.x > 400.0);
    assert!(motion.destination.x < 0.0);
}

#[test]
fn spawner_emits_one_monster_per_interval() {
    let mut world = World::new();
    world.insert_resource(PlayArea::default());
    world.insert_resource(Tunables::default());
    world.insert_resource(MonsterSpawner::new(1.0));

    world.insert_resource(time_with_delta(0.6));
    run_system_once(&mut world, super::tick_spawner);
    assert_eq!(monster_count(&mut world), 0);

    world.insert_resource(time_with_delta(0.6));
    run_system_once(&mut world, super::tick_spawner);
    assert_eq!(monster_count(&mut world), 1);

    world.insert_resource(time_with_delta(2.0));
    run_system_once(&mut world, super::tick_spawner);
    assert_eq!(monster_count(&mut world), 3);
}

#[test]
fn reset_restarts_the_interval() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    let mut spawner = MonsterSpawner::new(1.0);
    spawner.timer.tick(std::time::Duration::from_secs_f32(0.9));
    world.insert_resource(spawner);

    run_system_once(&mut world, super::reset_spawner);

    assert_eq!(world.resource::<MonsterSpawner>().timer.elapsed_secs(), 0.0);
}
