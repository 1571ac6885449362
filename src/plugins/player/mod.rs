//! Player plugin.
//!
//! Pipeline:
//! - Update: sample movement keys into PlayerInput, sample cursor into Aim
//! - FixedUpdate: apply velocity to the kinematic body, clamp to the arena

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::camera::MainCamera;
use crate::plugins::session::session_running;

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub move_axis: Vec2,
}

/// Current aim direction in radians, updated from the pointer.
///
/// Kept as a resource so the fire producer and headless tests read the same
/// value the cursor system writes.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Aim {
    pub angle: f32,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .insert_resource(Aim::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, update_aim_from_cursor)
                .run_if(in_state(GameState::InGame).and(session_running)),
        )
        .add_systems(
            FixedUpdate,
            apply_movement.run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(22.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(10.0),
        layers,
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return };

    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = if axis.length_squared() > 0.0 {
        axis.normalize()
    } else {
        Vec2::ZERO
    };
}

/// Rotate the ship toward the pointer and record the aim angle.
///
/// No-ops in headless apps where no window or camera exists.
fn update_aim_from_cursor(
    mut aim: ResMut<Aim>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Ok((camera, camera_tf)) = q_camera.single() else { return };
    let Ok(world_cursor) = camera.viewport_to_world_2d(camera_tf, cursor) else { return };
    let Ok(mut player_tf) = q_player.single_mut() else { return };

    let origin = player_tf.translation.truncate();
    let dir = world_cursor - origin;
    if dir.length_squared() < 1e-4 {
        return;
    }

    aim.angle = dir.y.atan2(dir.x);
    player_tf.rotation = Quat::from_rotation_z(aim.angle);
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &mut Transform), With<Player>>,
) {
    let Ok((mut vel, mut tf)) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;

    // Kinematic bodies ignore contact response; keep the ship on screen.
    tf.translation.x = tf
        .translation
        .x
        .clamp(-tunables.arena_half_width, tunables.arena_half_width);
    tf.translation.y = tf
        .translation
        .y
        .clamp(-tunables.arena_half_height, tunables.arena_half_height);
}

#[cfg(test)]
mod tests;
