//! Projectiles plugin: shooting + hit resolution.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │  PointerReleased messages (see plugins::input)               │
//!   │        │                                                     │
//!   │        v                                                     │
//!   │  fire_projectiles                                            │
//!   │    - no point / aimed backwards → ignored                    │
//!   │    - otherwise spawn Projectile + Motion (origin → far away) │
//!   └──────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate (fixed dt)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │  Avian emits CollisionStart for Monster/Projectile sensors   │
//!   │  resolve_projectile_hits                                     │
//!   │    - pairs by category tag, not by argument order            │
//!   │    - removes both entities, each at most once                │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

pub mod aim;
pub mod collision;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{
    layers::projectile_layers, play_area::PlayArea, state::GameState, tunables::Tunables,
};
use crate::plugins::input::{PointerInputSystems, PointerReleased};
use crate::plugins::motion::Motion;
use crate::plugins::player::Player;

use aim::{aim_shot, Shot};

#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub direction: Vec2,
}

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            fire_projectiles
                .after(PointerInputSystems)
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::resolve_projectile_hits
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Consumer: turn pointer releases into projectiles.
pub fn fire_projectiles(
    mut commands: Commands,
    mut releases: MessageReader<PointerReleased>,
    q_player: Query<&Transform, With<Player>>,
    area: Res<PlayArea>,
    tunables: Res<Tunables>,
) {
    let player_tf = match q_player.single() {
        Ok(tf) => tf,
        Err(e) => {
            debug!("No single Player Transform: {e:?}");
            releases.clear();
            return;
        }
    };
    let origin = player_tf.translation.truncate();

    for release in releases.read() {
        let Some(point) = release.position else {
            debug!("Release without a scene point");
            continue;
        };

        let Some(shot) = aim_shot(origin, point, area.width() * tunables.shot_range_factor) else {
            debug!("Rejected backward shot at {point}");
            continue;
        };

        spawn_projectile(&mut commands, &shot, &tunables);
    }
}

pub fn spawn_projectile(commands: &mut Commands, shot: &Shot, tunables: &Tunables) -> Entity {
    let r = tunables.projectile_radius;

    commands
        .spawn((
            Name::new("Projectile"),
            Projectile { direction: shot.direction },
            Sprite {
                color: Color::srgb(0.2, 0.2, 0.25),
                custom_size: Some(Vec2::splat(r * 2.0)),
                ..default()
            },
            Transform::from_translation(shot.origin.extend(2.0)),
            Motion::new(shot.origin, shot.destination, tunables.projectile_flight_secs),
            // Dynamic so contacts against kinematic monsters are always reported.
            RigidBody::Dynamic,
            GravityScale(0.0),
            Collider::circle(r),
            Sensor,
            projectile_layers(),
            // Avian only emits CollisionStart/End if one collider has this marker.
            CollisionEventsEnabled,
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}
