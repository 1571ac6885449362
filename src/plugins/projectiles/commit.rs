//! Return commit: the single writer that moves released shots back onto the
//! free list. Value writes only, no archetype moves.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledShot, ShotState};
use super::pool::{inactive_shot_layers, ShotPool};

pub fn return_to_pool_commit(
    mut pool: ResMut<ShotPool>,
    mut shots: Query<
        (
            Entity,
            &mut ShotState,
            &mut CollisionLayers,
            &mut LinearVelocity,
            &mut Visibility,
        ),
        With<PooledShot>,
    >,
) {
    for (entity, mut state, mut layers, mut velocity, mut visibility) in &mut shots {
        if *state != ShotState::PendingReturn {
            continue;
        }

        *state = ShotState::Inactive;
        *layers = inactive_shot_layers();
        *velocity = LinearVelocity(Vec2::ZERO);
        *visibility = Visibility::Hidden;

        pool.free.push(entity);
    }
}
