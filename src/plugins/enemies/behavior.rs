//! Fixed-step enemy behavior dispatch.
//!
//! Every system here filters on lifecycle state first, so dormant and
//! pending-return entities are categorically excluded from steering. The
//! fixed clock is driven by virtual time; pausing the session freezes all
//! of these, including the arming timers.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

use super::components::{Enemy, EnemyState, Wander};
use super::pool::armed_enemy_layers;
use super::registry::EnemyRegistry;

const SPIN_PER_TICK: f32 = 0.05;
const WANDER_ARRIVE_DIST: f32 = 8.0;
const WANDER_RANGE: f32 = 180.0;

/// Ticks arming timers, scales the fade-in, and promotes finished enemies
/// to `Active`. Promotion is where the collision filter switches on and
/// drifters get their launch velocity, so nothing can hit an enemy the
/// player has not had time to see.
pub fn tick_arming(
    time: Res<Time<Fixed>>,
    registry: Res<EnemyRegistry>,
    mut rng: ResMut<GameRng>,
    mut enemies: Query<(
        &Enemy,
        &mut EnemyState,
        &mut Transform,
        &mut Sprite,
        &mut CollisionLayers,
        &mut LinearVelocity,
    )>,
) {
    for (enemy, mut state, mut transform, mut sprite, mut layers, mut velocity) in &mut enemies {
        let EnemyState::Arming { timer } = &mut *state else {
            continue;
        };
        timer.tick(time.delta());

        let Ok(kind) = registry.get(enemy.kind) else {
            warn!("unknown enemy kind {:?}, recycling", enemy.kind);
            *state = EnemyState::PendingReturn;
            continue;
        };

        if !timer.is_finished() {
            let t = timer.fraction();
            transform.scale = Vec3::splat(0.1 + 0.9 * t);
            let mut color = sprite.color.to_srgba();
            color.alpha = 0.15 + 0.85 * t;
            sprite.color = color.into();
            continue;
        }

        transform.scale = Vec3::ONE;
        let mut color = sprite.color.to_srgba();
        color.alpha = 1.0;
        sprite.color = color.into();
        *layers = armed_enemy_layers();

        if !kind.targets_player && !kind.wanders && kind.base_speed > 0.0 {
            // Drifters launch on a random diagonal and bounce off walls.
            let x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
            let y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
            velocity.0 = Vec2::new(x, y) * kind.base_speed;
        }

        *state = EnemyState::Active;
    }
}

/// Pure pursuit: re-aim straight at the player every tick.
pub fn seek_player(
    registry: Res<EnemyRegistry>,
    player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<(&Enemy, &EnemyState, &Transform, &mut LinearVelocity)>,
) {
    let Ok(player_tf) = player.single() else {
        return;
    };
    let player_pos = player_tf.translation.truncate();

    for (enemy, state, transform, mut velocity) in &mut enemies {
        if !state.is_active() {
            continue;
        }
        let Ok(kind) = registry.get(enemy.kind) else {
            continue;
        };
        if !kind.targets_player {
            continue;
        }
        let to_player = player_pos - transform.translation.truncate();
        velocity.0 = to_player.normalize_or_zero() * kind.base_speed;
    }
}

/// Roam-then-rest: pick a nearby point, run at it, pause on arrival.
pub fn wander(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    registry: Res<EnemyRegistry>,
    mut rng: ResMut<GameRng>,
    mut enemies: Query<(
        &Enemy,
        &EnemyState,
        &mut Transform,
        &mut Wander,
        &mut LinearVelocity,
    )>,
) {
    for (enemy, state, mut transform, mut wander, mut velocity) in &mut enemies {
        if !state.is_active() {
            continue;
        }
        let Ok(kind) = registry.get(enemy.kind) else {
            continue;
        };
        if !kind.wanders {
            continue;
        }

        if let Some(rest) = &mut wander.rest {
            rest.tick(time.delta());
            if rest.is_finished() {
                wander.rest = None;
            }
            continue;
        }

        let position = transform.translation.truncate();
        match wander.target {
            None => {
                let offset = Vec2::new(
                    rng.0.gen_range(-WANDER_RANGE..WANDER_RANGE),
                    rng.0.gen_range(-WANDER_RANGE..WANDER_RANGE),
                );
                let target = Vec2::new(
                    (position.x + offset.x).clamp(
                        -tunables.arena_half_width + 30.0,
                        tunables.arena_half_width - 30.0,
                    ),
                    (position.y + offset.y).clamp(
                        -tunables.arena_half_height + 30.0,
                        tunables.arena_half_height - 30.0,
                    ),
                );
                let dir = (target - position).normalize_or_zero();
                velocity.0 = dir * kind.base_speed;
                transform.rotation = Quat::from_rotation_z(dir.y.atan2(dir.x));
                wander.target = Some(target);
            }
            Some(target) => {
                if position.distance(target) <= WANDER_ARRIVE_DIST {
                    velocity.0 = Vec2::ZERO;
                    wander.target = None;
                    wander.rest =
                        Some(Timer::from_seconds(tunables.wander_rest, TimerMode::Once));
                }
            }
        }
    }
}

/// Keeps active enemies inside the arena. Kinematic bodies take no solver
/// response from the walls, so drifters reflect here instead: an outward
/// velocity component flips when its axis crosses the bound.
pub fn reflect_at_walls(
    tunables: Res<Tunables>,
    mut enemies: Query<(&EnemyState, &mut Transform, &mut LinearVelocity), With<Enemy>>,
) {
    let half = Vec2::new(tunables.arena_half_width, tunables.arena_half_height);
    let margin = super::pool::ENEMY_SIZE * 0.5;
    for (state, mut transform, mut velocity) in &mut enemies {
        if !state.is_active() {
            continue;
        }
        let pos = transform.translation.truncate();
        if pos.x.abs() > half.x - margin && velocity.0.x.signum() == pos.x.signum() {
            velocity.0.x = -velocity.0.x;
        }
        if pos.y.abs() > half.y - margin && velocity.0.y.signum() == pos.y.signum() {
            velocity.0.y = -velocity.0.y;
        }
        transform.translation.x = pos.x.clamp(-half.x + margin, half.x - margin);
        transform.translation.y = pos.y.clamp(-half.y + margin, half.y - margin);
    }
}

/// Constant visual spin for kinds that rotate.
pub fn spin(
    registry: Res<EnemyRegistry>,
    mut enemies: Query<(&Enemy, &EnemyState, &mut Transform)>,
) {
    for (enemy, state, mut transform) in &mut enemies {
        if !state.is_active() {
            continue;
        }
        let Ok(kind) = registry.get(enemy.kind) else {
            continue;
        };
        if kind.rotates {
            transform.rotate_z(SPIN_PER_TICK);
        }
    }
}
