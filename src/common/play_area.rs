//! Play area: the visible bounds of the active scene.
//!
//! Scene coordinates put the origin at the bottom-left corner with y up,
//! so every position in `[0, size]` is on screen.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub size: Vec2,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self { size: Vec2::new(800.0, 600.0) }
    }
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Resize the play area to the current view before a new scene is built.
///
/// Headless apps have no window; the previous size is kept.
pub fn fit_play_area_to_view(windows: Query<&Window>, mut area: ResMut<PlayArea>) {
    let Ok(window) = windows.single() else {
        debug!("No single Window; keeping play area {:?}", area.size);
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x > 0.0 && size.y > 0.0 && area.size != size {
        area.size = size;
    }
}
