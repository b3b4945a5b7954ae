//! Monster spawner.
//!
//! One monster enters at the start of every play scene and one more on each
//! tick of a repeating timer. Each monster starts just beyond the right edge
//! at a random height, crosses to just beyond the left edge over a random
//! duration, then leaves the scene (unless a projectile removes it first).

use std::ops::RangeInclusive;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::{
    layers::monster_layers, play_area::PlayArea, state::GameState, tunables::Tunables,
};
use crate::plugins::motion::Motion;

#[derive(Component)]
pub struct Monster;

#[derive(Resource, Debug)]
pub struct MonsterSpawner {
    pub timer: Timer,
}

impl MonsterSpawner {
    pub fn new(interval_secs: f32) -> Self {
        Self { timer: Timer::from_seconds(interval_secs, TimerMode::Repeating) }
    }
}

/// Where and how fast a monster crosses the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterLaunch {
    pub start: Vec2,
    pub destination: Vec2,
    pub duration: f32,
}

/// Pick a launch for a monster of `size` in `area`.
///
/// The vertical position keeps the whole sprite on screen; if the area is
/// shorter than the monster, it is centred instead.
pub fn plan_monster<R: Rng>(
    area: &PlayArea,
    size: Vec2,
    durations: RangeInclusive<f32>,
    rng: &mut R,
) -> MonsterLaunch {
    let half = size * 0.5;
    let (min_y, max_y) = (half.y, area.height() - half.y);
    let y = if min_y < max_y {
        rng.gen_range(min_y..=max_y)
    } else {
        area.height() * 0.5
    };

    let duration = if durations.start() < durations.end() {
        rng.gen_range(durations)
    } else {
        *durations.start()
    };

    MonsterLaunch {
        start: Vec2::new(area.width() + half.x, y),
        destination: Vec2::new(-half.x, y),
        duration,
    }
}

pub fn plugin(app: &mut App) {
    let interval = app.world().resource::<Tunables>().spawn_interval_secs;
    app.insert_resource(MonsterSpawner::new(interval))
        .add_systems(
            OnEnter(GameState::Playing),
            (reset_spawner, spawn_opening_monster)
                .chain()
                .after(crate::common::play_area::fit_play_area_to_view),
        )
        .add_systems(
            FixedUpdate,
            tick_spawner.run_if(in_state(GameState::Playing)),
        );
}

fn reset_spawner(tunables: Res<Tunables>, mut spawner: ResMut<MonsterSpawner>) {
    *spawner = MonsterSpawner::new(tunables.spawn_interval_secs);
}

fn spawn_opening_monster(mut commands: Commands, area: Res<PlayArea>, tunables: Res<Tunables>) {
    let mut rng = rand::thread_rng();
    spawn_monster(&mut commands, &area, &tunables, &mut rng);
}

fn tick_spawner(
    mut commands: Commands,
    time: Res<Time>,
    area: Res<PlayArea>,
    tunables: Res<Tunables>,
    mut spawner: ResMut<MonsterSpawner>,
) {
    spawner.timer.tick(time.delta());
    let due = spawner.timer.times_finished_this_tick();
    if due == 0 {
        return;
    }

    let mut rng = rand::thread_rng();
    for _ in 0..due {
        spawn_monster(&mut commands, &area, &tunables, &mut rng);
    }
}

pub fn spawn_monster<R: Rng>(
    commands: &mut Commands,
    area: &PlayArea,
    tunables: &Tunables,
    rng: &mut R,
) -> Entity {
    let size = tunables.monster_size;
    let launch = plan_monster(
        area,
        size,
        tunables.monster_min_secs..=tunables.monster_max_secs,
        rng,
    );

    commands
        .spawn((
            Name::new("Monster"),
            Monster,
            Sprite {
                color: Color::srgb(0.35, 0.6, 0.25),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(launch.start.extend(1.0)),
            Motion::new(launch.start, launch.destination, launch.duration),
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            Sensor,
            monster_layers(),
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

#[cfg(test)]
mod tests;
