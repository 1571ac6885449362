mod common;

use bevy::prelude::*;
use neon_swarm::plugins::projectiles::{PooledShot, ShotState};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..5 {
        app.update();
    }
}

#[test]
fn shot_pool_is_prespawned_dormant() {
    let mut app = common::app_headless();
    app.update();

    let world = app.world_mut();
    let mut q = world.query::<(&PooledShot, &ShotState)>();
    let total = q.iter(world).count();
    assert!(total > 0);
    assert!(q
        .iter(world)
        .all(|(_, state)| *state == ShotState::Inactive));

    let free = world
        .resource::<neon_swarm::plugins::projectiles::pool::ShotPool>()
        .free
        .len();
    assert_eq!(free, total);
}

#[test]
fn player_and_walls_exist_in_game() {
    let mut app = common::app_headless();
    app.update();
    app.update();

    let world = app.world_mut();
    let players = world
        .query::<&neon_swarm::plugins::player::Player>()
        .iter(world)
        .count();
    assert_eq!(players, 1);

    let walls = world
        .query_filtered::<&Name, With<avian2d::prelude::RigidBody>>()
        .iter(world)
        .filter(|n| n.as_str().starts_with("Wall"))
        .count();
    assert_eq!(walls, 4);
}
