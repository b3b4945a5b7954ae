//! Global state machine.
//!
//! ```text
//! Playing --EndGame{won}--> GameOver --pointer release + flip--> Playing (fresh scene)
//! ```

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}
