//! Common, shared types.

pub mod layers;
pub mod play_area;
pub mod state;
pub mod tunables;
pub mod vector;

#[cfg(test)]
pub mod test_utils;
