//! 2D point helpers for aiming.
//!
//! Addition, subtraction and scalar multiplication/division are the `Vec2`
//! operators. The helpers here cover the parts that need a contract.

use bevy::prelude::*;

/// Euclidean length.
#[inline]
pub fn length(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector `v / length(v)`, or `None` when `v` has no usable length.
#[inline]
pub fn normalized(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Point reached by travelling `distance` from `origin` along `direction`.
#[inline]
pub fn travel(origin: Vec2, direction: Vec2, distance: f32) -> Vec2 {
    origin + direction * distance
}
