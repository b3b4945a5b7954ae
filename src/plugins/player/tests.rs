use bevy::prelude::*;

use crate::common::{play_area::PlayArea, test_utils::run_system_once, tunables::Tunables};

#[test]
fn spawn_creates_player_at_anchor() {
    let mut world = World::new();
    world.insert_resource(PlayArea::new(400.0, 600.0));
    world.insert_resource(Tunables::default());

    run_system_once(&mut world, super::spawn);

    let mut q = world.query_filtered::<&Transform, With<super::Player>>();
    let tf = q.single(&world).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(40.0, 300.0));
}
