//! Pooled enemy storage.
//!
//! Enemies are recycled, never despawned. A dormant entity keeps its
//! archetype (same components, fresh values on reuse) so acquisition and
//! release are plain component writes instead of structural churn. Dormant
//! entities carry an empty collision filter, which keeps the broad phase
//! from ever producing pairs for them.

use avian2d::prelude::*;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{Enemy, EnemyState, Wander};
use super::registry::{EnemyKind, EnemyKindId};

pub const ENEMY_SIZE: f32 = 22.0;

/// Per-kind free lists. Entity ids are generational, so a stale handle to a
/// recycled slot can never reach the wrong incarnation.
#[derive(Resource, Debug, Default)]
pub struct EnemyPool {
    pub free: HashMap<EnemyKindId, Vec<Entity>>,
}

pub fn armed_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::PlayerShot])
}

pub fn dormant_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, LayerMask::NONE)
}

/// Pops a dormant entity of the requested kind, or spawns a fresh one when
/// the free list is empty. Either way the entity comes back in `Arming`
/// state at `position`, faded down and filterless.
pub fn acquire(
    commands: &mut Commands,
    pool: &mut EnemyPool,
    kind: &EnemyKind,
    position: Vec2,
) -> Entity {
    let reset = (
        EnemyState::arming(kind.arming_delay),
        Transform::from_translation(position.extend(1.0)).with_scale(Vec3::splat(0.1)),
        LinearVelocity::ZERO,
        Visibility::Visible,
        dormant_enemy_layers(),
        Sprite {
            color: kind.color.with_alpha(0.15),
            custom_size: Some(Vec2::splat(ENEMY_SIZE)),
            ..default()
        },
        Wander::default(),
    );

    if let Some(entity) = pool.free.entry(kind.id).or_default().pop() {
        commands.entity(entity).insert(reset);
        return entity;
    }

    commands
        .spawn((
            Name::new(kind.name),
            Enemy { kind: kind.id },
            RigidBody::Kinematic,
            Collider::rectangle(ENEMY_SIZE, ENEMY_SIZE),
            CollisionEventsEnabled,
            reset,
        ))
        .id()
}

/// Commit point for releases. Everything marked `PendingReturn` during this
/// step goes dormant here, in one writer, so the free list never sees a
/// half-released entity.
pub fn recycle_enemies(
    mut pool: ResMut<EnemyPool>,
    mut enemies: Query<(
        Entity,
        &Enemy,
        &mut EnemyState,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
    )>,
) {
    for (entity, enemy, mut state, mut velocity, mut visibility, mut layers) in &mut enemies {
        if !matches!(*state, EnemyState::PendingReturn) {
            continue;
        }
        *state = EnemyState::Inactive;
        velocity.0 = Vec2::ZERO;
        *visibility = Visibility::Hidden;
        *layers = dormant_enemy_layers();
        pool.free.entry(enemy.kind).or_default().push(entity);
    }
}
