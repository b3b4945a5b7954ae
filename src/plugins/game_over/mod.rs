//! End screen and restart.
//!
//! ```text
//! Playing ──EndGame{won}──> GameOver (label "You Won!" / "You Lose :[")
//!                              │ any pointer release
//!                              v
//!                       FlipTransition (0.5 s)
//!                         first half : old scene folds away
//!                         midpoint   : NextState(Playing) → fresh scene
//!                         second half: new scene unfolds
//! ```
//!
//! Nothing in the play scene decides the outcome. `EndGame` is the hook for
//! whatever rule ends a session.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{play_area::PlayArea, state::GameState, tunables::Tunables};
use crate::plugins::camera::MainCamera;
use crate::plugins::input::{PointerInputSystems, PointerReleased};

/// Request to end the current play session.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndGame {
    pub won: bool,
}

/// Outcome of the last finished session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
}

#[derive(Component)]
pub struct GameOverLabel;

/// Horizontal flip between the end screen and a new play scene.
#[derive(Resource, Debug)]
pub struct FlipTransition {
    timer: Timer,
    swapped: bool,
}

impl FlipTransition {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
            swapped: false,
        }
    }

    /// Progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.timer.fraction()
    }

    /// Horizontal scale of the view: 1 → 0 → 1 across the transition.
    #[inline]
    pub fn scale_x(&self) -> f32 {
        (self.progress() * std::f32::consts::PI).cos().abs()
    }

    #[inline]
    pub fn past_midpoint(&self) -> bool {
        self.progress() >= 0.5
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

pub fn outcome_message(won: bool) -> &'static str {
    if won { "You Won!" } else { "You Lose :[" }
}

pub fn plugin(app: &mut App) {
    app.add_message::<EndGame>()
        .add_systems(Update, end_game.run_if(in_state(GameState::Playing)))
        .add_systems(
            OnEnter(GameState::GameOver),
            (discard_stale_releases, spawn_label),
        )
        .add_systems(OnEnter(GameState::Playing), discard_stale_releases)
        .add_systems(
            Update,
            request_restart
                .after(PointerInputSystems)
                .run_if(in_state(GameState::GameOver))
                .run_if(not(resource_exists::<FlipTransition>)),
        )
        .add_systems(
            Update,
            advance_flip
                .after(request_restart)
                .run_if(resource_exists::<FlipTransition>),
        );
}

/// Leave the play scene on the last `EndGame` request of this frame.
pub fn end_game(
    mut commands: Commands,
    mut requests: MessageReader<EndGame>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    info!("Game over: won = {}", request.won);
    commands.insert_resource(GameOutcome { won: request.won });
    next.set(GameState::GameOver);
}

fn spawn_label(
    mut commands: Commands,
    area: Res<PlayArea>,
    outcome: Option<Res<GameOutcome>>,
) {
    let won = outcome.is_some_and(|o| o.won);

    commands.spawn((
        Name::new("GameOverLabel"),
        GameOverLabel,
        Text2d::new(outcome_message(won)),
        TextFont::from_font_size(50.0),
        TextColor(Color::BLACK),
        Transform::from_translation(area.center().extend(10.0)),
        DespawnOnExit(GameState::GameOver),
    ));
}

/// Releases queued in one scene must not act in the next one.
///
/// Covers the last frames of play (no instant restart) and the taps made
/// while the flip runs (no shot on the first frame of a new game).
fn discard_stale_releases(mut releases: ResMut<Messages<PointerReleased>>) {
    releases.clear();
}

/// Any release on the end screen starts the flip to a new game.
pub fn request_restart(
    mut commands: Commands,
    mut releases: MessageReader<PointerReleased>,
    tunables: Res<Tunables>,
) {
    if releases.read().count() == 0 {
        return;
    }

    debug!("Restart requested");
    commands.insert_resource(FlipTransition::new(tunables.transition_secs));
}

/// Drive the flip: swap scenes at the midpoint, restore the view at the end.
///
/// The camera is optional; headless apps still switch scenes on schedule.
pub fn advance_flip(
    mut commands: Commands,
    time: Res<Time>,
    mut flip: ResMut<FlipTransition>,
    mut next: ResMut<NextState<GameState>>,
    mut q_cam: Query<&mut Transform, With<MainCamera>>,
) {
    flip.timer.tick(time.delta());

    if !flip.swapped && flip.past_midpoint() {
        flip.swapped = true;
        next.set(GameState::Playing);
    }

    // The view narrows as the camera widens; scale 0 is not invertible.
    let scale_x = if flip.is_finished() { 1.0 } else { flip.scale_x().max(1e-3) };
    for mut tf in &mut q_cam {
        tf.scale.x = 1.0 / scale_x;
    }

    if flip.is_finished() {
        commands.remove_resource::<FlipTransition>();
    }
}
