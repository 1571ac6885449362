//! Producer: turn fire input into buffered requests.
//!
//! This system never touches `ShotPool`; it only enqueues intent. Holding
//! the fire button shoots continuously, gated by the cooldown timer.

use std::time::Duration;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::{Aim, Player};
use crate::plugins::powerups::PowerupKind;
use crate::plugins::session::Session;

use super::messages::FireRequest;

const MUZZLE_OFFSET: f32 = 18.0;

#[derive(Resource, Debug)]
pub struct FireCooldown(pub Timer);

impl FireCooldown {
    /// Starts elapsed, so the first press fires immediately.
    pub fn from_tunables(tunables: &Tunables) -> Self {
        let mut timer = Timer::from_seconds(tunables.fire_cooldown, TimerMode::Once);
        timer.tick(Duration::from_secs_f32(tunables.fire_cooldown));
        Self(timer)
    }
}

/// Angle offsets for one trigger pull under the given powerup.
pub fn spread_offsets(active: Option<PowerupKind>, spread: f32) -> Vec<f32> {
    match active {
        Some(PowerupKind::DoubleShot) => vec![-spread, spread],
        Some(PowerupKind::TripleShot) => vec![0.0, -spread, spread],
        _ => vec![0.0],
    }
}

pub fn request_player_shots(
    time: Res<Time>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    players: Query<&Transform, With<Player>>,
    aim: Res<Aim>,
    session: Res<Session>,
    tunables: Res<Tunables>,
    mut cooldown: ResMut<FireCooldown>,
    mut writer: MessageWriter<FireRequest>,
) {
    cooldown.0.tick(time.delta());

    let firing = mouse.as_ref().is_some_and(|m| m.pressed(MouseButton::Left))
        || keys.as_ref().is_some_and(|k| k.pressed(KeyCode::Space));
    if !firing || !cooldown.0.is_finished() {
        return;
    }

    let Ok(player_tf) = players.single() else {
        return;
    };
    cooldown.0.reset();

    let direction = Vec2::from_angle(aim.angle);
    let origin = player_tf.translation.truncate() + direction * MUZZLE_OFFSET;

    for angle_offset in spread_offsets(session.active_powerup(), tunables.spread_offset) {
        writer.write(FireRequest {
            origin,
            base_angle: aim.angle,
            angle_offset,
        });
    }
}
