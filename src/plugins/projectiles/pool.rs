use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{PooledShot, Shot, ShotState};

pub const SHOT_RADIUS: f32 = 4.0;

#[derive(Resource, Debug)]
pub struct ShotPool {
    pub free: Vec<Entity>,
    pub capacity: usize,
}

impl ShotPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

#[inline]
pub fn active_shot_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerShot, [Layer::World, Layer::Enemy])
}

/// Disabled without structural changes: empty filters collide with nothing,
/// so dormant shots never generate collision events.
#[inline]
pub fn inactive_shot_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerShot, [] as [Layer; 0])
}

/// Pre-spawn the whole pool dormant. Physics components stay attached for
/// the entity's lifetime; activation and release are value writes only.
pub fn init_shot_pool(mut commands: Commands, mut pool: ResMut<ShotPool>) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Shot(Pooled)"),
                PooledShot,
                ShotState::Inactive,
                Shot::default(),
                Sprite {
                    color: Color::srgb(1.0, 0.95, 0.6),
                    custom_size: Some(Vec2::new(12.0, 4.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::circle(SHOT_RADIUS),
                inactive_shot_layers(),
                LinearVelocity(Vec2::ZERO),
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(e);
    }
}
