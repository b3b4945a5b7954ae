use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::plugins::core::Score;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

/// Order a contact as `(monster, projectile)` by category tag.
///
/// Either side may be reported first. Anything that is not exactly one
/// monster and one projectile yields `None`.
#[inline]
fn monster_and_projectile(
    a: (CollisionTarget, &CollisionLayers),
    b: (CollisionTarget, &CollisionLayers),
) -> Option<(CollisionTarget, CollisionTarget)> {
    let is_pair = |m: &CollisionLayers, p: &CollisionLayers| {
        is_in_layer(m, Layer::Monster) && is_in_layer(p, Layer::Projectile)
    };

    if is_pair(a.1, b.1) {
        Some((a.0, b.0))
    } else if is_pair(b.1, a.1) {
        Some((b.0, a.0))
    } else {
        None
    }
}

/// Remove every monster/projectile pair that started touching this step.
pub fn resolve_projectile_hits(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_layers: Query<&CollisionLayers>,
    mut score: ResMut<Score>,
    // Per-step dedupe: an entity is removed at most once.
    mut removed: Local<HashSet<Entity>>,
) {
    removed.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let (Ok(l1), Ok(l2)) = (q_layers.get(t1.collider), q_layers.get(t2.collider)) else {
            continue;
        };

        let Some((monster, projectile)) = monster_and_projectile((t1, l1), (t2, l2)) else {
            continue;
        };

        let (monster, projectile) = (monster.gameplay_owner(), projectile.gameplay_owner());
        if removed.contains(&monster) || removed.contains(&projectile) {
            continue;
        }
        removed.insert(monster);
        removed.insert(projectile);

        commands.entity(monster).try_despawn();
        commands.entity(projectile).try_despawn();
        score.0 += 1;

        info!("Hit: projectile {projectile} removed monster {monster}");
    }
}
