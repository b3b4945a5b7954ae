//! Player plugin.
//!
//! The player is a single stationary sprite near the left edge, created when
//! a play scene starts and removed with it.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{
    play_area::{fit_play_area_to_view, PlayArea},
    state::GameState,
    tunables::Tunables,
};

#[derive(Component)]
pub struct Player;

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::Playing),
        spawn.after(fit_play_area_to_view),
    );
}

/// Player position for a play area.
#[inline]
pub fn player_position(area: &PlayArea, tunables: &Tunables) -> Vec2 {
    area.size * tunables.player_anchor
}

fn spawn(mut commands: Commands, area: Res<PlayArea>, tunables: Res<Tunables>) {
    let pos = player_position(&area, &tunables);

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.15, 0.15, 0.2),
            custom_size: Some(tunables.player_size),
            ..default()
        },
        Transform::from_translation(pos.extend(1.0)),
        DespawnOnExit(GameState::Playing),
    ));
}

#[cfg(test)]
mod tests;
