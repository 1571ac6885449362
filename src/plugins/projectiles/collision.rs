//! Shot collision resolution.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::plugins::effects::{EffectKind, EffectRequest};
use crate::plugins::enemies::registry::EnemyRegistry;
use crate::plugins::enemies::{EnemiesAlive, Enemy, EnemyState};
use crate::plugins::session::ScoreAward;

use super::components::{PooledShot, Shot, ShotState};

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
fn targets(contact: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: contact.collider1,
            body: contact.body1,
        },
        CollisionTarget {
            collider: contact.collider2,
            body: contact.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

/// Consumes the contact pairs from the physics step just taken.
///
/// A wall contact releases the shot. An enemy contact only resolves when
/// the enemy is still `Active`; an enemy already released earlier in this
/// same step reads as non-active, so a kill can never score twice, and an
/// arming enemy never blocks a shot. Kills award points scaled by the
/// kind's multiplier and decrement the live count.
pub fn resolve_shot_collisions(
    mut started: MessageReader<CollisionStart>,
    shot_filter: Query<(), With<PooledShot>>,
    mut shots: Query<(&mut ShotState, &Shot), With<PooledShot>>,
    layers: Query<&CollisionLayers>,
    mut enemies: Query<(&Enemy, &mut EnemyState, &Transform)>,
    registry: Res<EnemyRegistry>,
    mut alive: ResMut<EnemiesAlive>,
    mut scores: MessageWriter<ScoreAward>,
    mut effects: MessageWriter<EffectRequest>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for contact in started.read() {
        let (t1, t2) = targets(contact);

        let s1 = shot_filter.contains(t1.collider);
        let s2 = shot_filter.contains(t2.collider);
        if !(s1 ^ s2) {
            continue;
        }
        let (shot_side, other_side) = if s1 { (t1, t2) } else { (t2, t1) };

        // One resolution per shot per step.
        if !seen.insert(shot_side.collider) {
            continue;
        }

        let Ok(other_layers) = layers.get(other_side.collider) else {
            continue;
        };
        let Ok((mut shot_state, _shot)) = shots.get_mut(shot_side.collider) else {
            continue;
        };
        if *shot_state != ShotState::Active {
            continue;
        }

        if is_in_layer(other_layers, Layer::World) {
            *shot_state = ShotState::PendingReturn;
            continue;
        }

        if is_in_layer(other_layers, Layer::Enemy) {
            let enemy_entity = other_side.gameplay_owner();
            let Ok((enemy, mut enemy_state, enemy_tf)) = enemies.get_mut(enemy_entity) else {
                continue;
            };
            if !enemy_state.is_active() {
                continue;
            }

            let multiplier = match registry.get(enemy.kind) {
                Ok(kind) => kind.score_multiplier,
                Err(err) => {
                    warn!("{err}, scoring kill at base value");
                    1
                }
            };

            *enemy_state = EnemyState::PendingReturn;
            *shot_state = ShotState::PendingReturn;
            alive.0 = alive.0.saturating_sub(1);

            scores.write(ScoreAward { multiplier });
            effects.write(EffectRequest {
                kind: EffectKind::Destruction,
                position: enemy_tf.translation.truncate(),
            });
        }
    }
}
