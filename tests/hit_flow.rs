mod common;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use ninja_attack::common::tunables::Tunables;
use ninja_attack::plugins::{
    core::Score,
    monsters::Monster,
    projectiles::{aim::Shot, spawn_projectile, Projectile},
};

fn monsters(app: &mut App) -> Vec<(Entity, Vec2)> {
    app.world_mut()
        .query_filtered::<(Entity, &Transform), With<Monster>>()
        .iter(app.world())
        .map(|(e, tf)| (e, tf.translation.truncate()))
        .collect()
}

#[test]
fn physics_contact_removes_monster_and_projectile() {
    let mut app = common::app_headless();
    common::tick(&mut app, 2);

    let opening = monsters(&mut app);
    assert_eq!(opening.len(), 1, "expected only the opening monster");
    let (monster, at) = opening[0];

    // Fire along the monster's row from a short distance to its left.
    let origin = at - Vec2::new(120.0, 0.0);
    let shot = Shot {
        origin,
        direction: Vec2::X,
        destination: origin + Vec2::new(1600.0, 0.0),
    };
    let projectile = app
        .world_mut()
        .run_system_once(move |mut commands: Commands, tunables: Res<Tunables>| {
            spawn_projectile(&mut commands, &shot, &tunables)
        })
        .expect("spawn system failed");
    app.world_mut().flush();
    assert!(app.world().get_entity(projectile).is_ok());

    // Closing speed is well over 1000 px/s; half a second is plenty.
    let mut frames = 0;
    while app.world().get_entity(monster).is_ok() {
        common::tick(&mut app, 1);
        frames += 1;
        assert!(frames < 10, "monster was never hit");
    }

    assert!(app.world().get_entity(projectile).is_err());
    let left = app.world_mut().query::<&Projectile>().iter(app.world()).count();
    assert_eq!(left, 0);
    assert_eq!(*app.world().resource::<Score>(), Score(1));
}
