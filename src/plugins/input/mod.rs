//! Pointer input: touch/click releases, resolved to scene coordinates.
//!
//! This is the producer side of a producer → queue → consumer pipeline.
//! Consumers (shooting while playing, restart on the end screen) only read
//! `PointerReleased` messages and never touch windows or cameras.
//!
//! ```text
//! Update:
//!   emit_pointer_releases  (mouse left release / touch release → scene point)
//!        │  PointerReleased { position: Option<Vec2> }
//!        v
//!   fire_projectiles (Playing) | request_restart (GameOver)
//! ```

use bevy::input::touch::Touches;
use bevy::prelude::*;

use crate::plugins::camera::MainCamera;

/// A touch or click was released.
///
/// `position` is `None` when the release could not be resolved to a point
/// in the scene (cursor outside the window, no camera).
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct PointerReleased {
    pub position: Option<Vec2>,
}

/// Input-side ordering label; consumers run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerInputSystems;

pub fn plugin(app: &mut App) {
    app.add_message::<PointerReleased>()
        .add_systems(Update, emit_pointer_releases.in_set(PointerInputSystems));
}

/// Read raw mouse/touch releases and publish them as `PointerReleased`.
///
/// Input resources are optional so headless apps (no `InputPlugin`) run this as a no-op.
pub fn emit_pointer_releases(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut writer: MessageWriter<PointerReleased>,
) {
    let camera = q_camera.single().ok();
    let to_scene = |viewport: Vec2| -> Option<Vec2> {
        let (camera, camera_tf) = camera?;
        match camera.viewport_to_world_2d(camera_tf, viewport) {
            Ok(p) => Some(p),
            Err(e) => {
                debug!("viewport_to_world_2d failed: {e:?}");
                None
            }
        }
    };

    if let Some(buttons) = buttons {
        if buttons.just_released(MouseButton::Left) {
            let position = windows
                .single()
                .ok()
                .and_then(Window::cursor_position)
                .and_then(to_scene);
            writer.write(PointerReleased { position });
        }
    }

    if let Some(touches) = touches {
        for touch in touches.iter_just_released() {
            writer.write(PointerReleased { position: to_scene(touch.position()) });
        }
    }
}
