//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::{
    play_area::{fit_play_area_to_view, PlayArea},
    state::GameState,
    tunables::Tunables,
};

/// Hits landed during the current play session.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.init_resource::<PlayArea>();
    app.init_resource::<Score>();
    app.insert_resource(ClearColor(Color::WHITE));
    app.add_systems(
        OnEnter(GameState::Playing),
        (fit_play_area_to_view, reset_score),
    );
}

fn reset_score(mut score: ResMut<Score>) {
    score.0 = 0;
}
