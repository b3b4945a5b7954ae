//! Move-then-remove motion.
//!
//! A `Motion` is a linear move from `start` to `destination` over `duration`
//! seconds. It is advanced once per fixed tick; when it completes, the entity
//! leaves the scene.

use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Motion {
    pub start: Vec2,
    pub destination: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

impl Motion {
    pub fn new(start: Vec2, destination: Vec2, duration: f32) -> Self {
        Self { start, destination, duration, elapsed: 0.0 }
    }

    /// Position at the current elapsed time.
    #[inline]
    pub fn position(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.destination;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.start.lerp(self.destination, t)
    }

    /// Advance by `dt` seconds and return the new position.
    #[inline]
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed += dt.max(0.0);
        self.position()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        advance_motions.run_if(in_state(GameState::Playing)),
    );
}

/// Step every motion and remove entities whose motion has completed.
pub fn advance_motions(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Motion, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (e, mut motion, mut tf) in &mut q {
        let pos = motion.advance(dt);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;

        if motion.is_finished() {
            commands.entity(e).try_despawn();
        }
    }
}
