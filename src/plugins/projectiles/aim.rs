//! Aiming: from a release point to a shot.

use bevy::prelude::*;

use crate::common::vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec2,
    pub direction: Vec2,
    pub destination: Vec2,
}

/// Aim from `origin` toward `target`, travelling `range` units.
///
/// Returns `None` unless the target lies strictly to the right of the origin.
pub fn aim_shot(origin: Vec2, target: Vec2, range: f32) -> Option<Shot> {
    let offset = target - origin;
    if offset.x <= 0.0 {
        return None;
    }

    let direction = vector::normalized(offset)?;
    Some(Shot {
        origin,
        direction,
        destination: vector::travel(origin, direction, range),
    })
}
