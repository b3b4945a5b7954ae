//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub spawn_interval_secs: f32,
    pub monster_min_secs: f32,
    pub monster_max_secs: f32,
    pub monster_size: Vec2,
    pub projectile_radius: f32,
    pub projectile_flight_secs: f32,
    /// Shot travel distance as a multiple of the play-area width.
    pub shot_range_factor: f32,
    /// Player position as a fraction of the play-area size.
    pub player_anchor: Vec2,
    pub player_size: Vec2,
    pub transition_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            spawn_interval_secs: 1.0,
            monster_min_secs: 2.0,
            monster_max_secs: 4.0,
            monster_size: Vec2::splat(40.0),
            projectile_radius: 8.0,
            projectile_flight_secs: 2.0,
            shot_range_factor: 2.0,
            player_anchor: Vec2::new(0.1, 0.5),
            player_size: Vec2::new(30.0, 40.0),
            transition_secs: 0.5,
        }
    }
}
