//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod game_over;
pub mod input;
pub mod monsters;
pub mod motion;
pub mod physics;
pub mod player;
pub mod projectiles;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    input::plugin(app);
    motion::plugin(app);
    player::plugin(app);
    monsters::plugin(app);
    game_over::plugin(app);
    app.add_plugins(projectiles::ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
