//! Fire consumer: activate shots from the pool.
//!
//! The free list contains only valid pooled shot entities; a pooled entity
//! that fails the query is an invariant violation and crashes loudly
//! instead of being branched around in the hot loop.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{PooledShot, Shot, ShotState};
use super::messages::FireRequest;
use super::pool::{active_shot_layers, ShotPool};

pub fn allocate_shots_from_pool(
    mut pool: ResMut<ShotPool>,
    tunables: Res<Tunables>,
    mut reader: MessageReader<FireRequest>,
    mut shots: Query<
        (
            &mut ShotState,
            &mut Shot,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledShot>,
    >,
) {
    for req in reader.read() {
        let Some(entity) = pool.free.pop() else {
            // Capacity decision, not a correctness failure.
            continue;
        };

        let (mut state, mut shot, mut transform, mut velocity, mut visibility, mut layers) = shots
            .get_mut(entity)
            .expect("ShotPool contained an entity missing pooled shot components");

        let angle = req.angle();
        *state = ShotState::Active;
        shot.angle_offset = req.angle_offset;
        transform.translation = req.origin.extend(2.0);
        transform.rotation = Quat::from_rotation_z(angle);
        velocity.0 = Vec2::from_angle(angle) * tunables.shot_speed;
        *visibility = Visibility::Visible;
        *layers = active_shot_layers();
    }
}
