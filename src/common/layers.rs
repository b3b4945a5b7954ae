//! Collision layers (category tags).

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Monster,
    Projectile,
}

/// Monsters only report contacts with projectiles.
#[inline]
pub fn monster_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Monster, [Layer::Projectile])
}

/// Projectiles only report contacts with monsters.
#[inline]
pub fn projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::Monster])
}
