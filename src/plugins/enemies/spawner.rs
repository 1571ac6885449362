//! Timed wave spawner.

use bevy::prelude::*;
use rand::Rng;

use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;

use super::pool::{self, EnemyPool};
use super::registry::{EnemyKind, EnemyRegistry};

/// Count of enemies currently live (arming or active). The spawner stops at
/// `Tunables::max_enemies`; contact resolution decrements on every release.
#[derive(Resource, Debug, Default)]
pub struct EnemiesAlive(pub u32);

#[derive(Resource, Debug)]
pub struct SpawnTimer(pub Timer);

impl SpawnTimer {
    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self(Timer::from_seconds(
            tunables.enemy_spawn_cooldown,
            TimerMode::Repeating,
        ))
    }
}

/// Grid offset for slot `index` of a formation, wrapping to a new row every
/// `columns` slots.
pub fn formation_offset(index: u32, columns: u32, spacing: f32) -> Vec2 {
    let columns = columns.max(1);
    let col = index % columns;
    let row = index / columns;
    Vec2::new(col as f32 * spacing, -(row as f32) * spacing)
}

fn random_point(rng: &mut GameRng, tunables: &Tunables) -> Vec2 {
    let margin = 40.0;
    let x = rng
        .0
        .gen_range(-tunables.arena_half_width + margin..tunables.arena_half_width - margin);
    let y = rng
        .0
        .gen_range(-tunables.arena_half_height + margin..tunables.arena_half_height - margin);
    Vec2::new(x, y)
}

fn clamp_to_arena(point: Vec2, tunables: &Tunables) -> Vec2 {
    let margin = pool::ENEMY_SIZE;
    Vec2::new(
        point
            .x
            .clamp(-tunables.arena_half_width + margin, tunables.arena_half_width - margin),
        point
            .y
            .clamp(-tunables.arena_half_height + margin, tunables.arena_half_height - margin),
    )
}

/// Spawns one formation of `kind`, truncated so `alive` never exceeds the
/// global cap. Returns how many instances were actually placed.
pub fn spawn_formation(
    commands: &mut Commands,
    pool: &mut EnemyPool,
    kind: &EnemyKind,
    origin: Vec2,
    tunables: &Tunables,
    alive: &mut EnemiesAlive,
) -> u32 {
    let mut placed = 0;
    for index in 0..kind.formation_size.max(1) {
        if alive.0 >= tunables.max_enemies {
            break;
        }
        let offset = formation_offset(index, tunables.formation_columns, tunables.formation_spacing);
        let position = clamp_to_arena(origin + offset, tunables);
        pool::acquire(commands, pool, kind, position);
        alive.0 += 1;
        placed += 1;
    }
    placed
}

pub fn spawn_waves(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    registry: Res<EnemyRegistry>,
    mut rng: ResMut<GameRng>,
    mut pool: ResMut<EnemyPool>,
    mut timer: ResMut<SpawnTimer>,
    mut alive: ResMut<EnemiesAlive>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }
    if alive.0 >= tunables.max_enemies {
        debug!("enemy cap {} reached, skipping wave", tunables.max_enemies);
        return;
    }

    let count = rng.0.gen_range(tunables.wave_size_range());
    let mut spawned = 0;
    for _ in 0..count {
        if alive.0 >= tunables.max_enemies {
            break;
        }
        let kind = registry.random(&mut rng.0);
        let origin = random_point(&mut rng, &tunables);
        spawned += spawn_formation(&mut commands, &mut pool, kind, origin, &tunables, &mut alive);
    }
    debug!("spawned {} enemies, {} live", spawned, alive.0);
}
