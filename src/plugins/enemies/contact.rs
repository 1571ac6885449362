//! Player / enemy contact resolution.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::effects::{EffectKind, EffectRequest};
use crate::plugins::player::Player;
use crate::plugins::projectiles::components::{PooledShot, ShotState};
use crate::plugins::session::{LifeLost, Session};

use super::components::{Enemy, EnemyState};
use super::spawner::EnemiesAlive;

/// Consumes player/enemy contact pairs from the physics step just taken.
///
/// Only `Active` enemies count; a pair whose enemy was already released
/// earlier this step resolves against a non-active state and is ignored.
/// At most one contact resolves per step. A shield absorbs the hit and
/// destroys only the contacting enemy. Without one, the player loses a
/// life and the whole field resets: every live enemy and in-flight shot is
/// marked for return, and no points are awarded for the sweep.
pub fn resolve_player_contacts(
    mut started: MessageReader<CollisionStart>,
    players: Query<(), With<Player>>,
    mut enemies: Query<(&mut EnemyState, &Transform), With<Enemy>>,
    mut shots: Query<&mut ShotState, With<PooledShot>>,
    mut session: ResMut<Session>,
    mut alive: ResMut<EnemiesAlive>,
    mut lives: MessageWriter<LifeLost>,
    mut effects: MessageWriter<EffectRequest>,
) {
    let mut struck = None;
    for contact in started.read() {
        let (a, b) = (contact.collider1, contact.collider2);
        let hit = match (players.contains(a), players.contains(b)) {
            (true, false) => b,
            (false, true) => a,
            _ => continue,
        };
        let Ok((state, transform)) = enemies.get_mut(hit) else {
            continue;
        };
        if !state.is_active() {
            continue;
        }
        struck = Some((hit, transform.translation.truncate()));
        break;
    }

    let Some((hit, position)) = struck else {
        return;
    };

    effects.write(EffectRequest {
        kind: EffectKind::Destruction,
        position,
    });

    if session.consume_shield() {
        info!("shield absorbed a hit");
        if let Ok((mut state, _)) = enemies.get_mut(hit) {
            *state = EnemyState::PendingReturn;
        }
        alive.0 = alive.0.saturating_sub(1);
        return;
    }

    lives.write(LifeLost);
    for (mut state, _) in &mut enemies {
        if matches!(*state, EnemyState::Active | EnemyState::Arming { .. }) {
            *state = EnemyState::PendingReturn;
        }
    }
    alive.0 = 0;
    for mut state in &mut shots {
        if matches!(*state, ShotState::Active) {
            *state = ShotState::PendingReturn;
        }
    }
}
