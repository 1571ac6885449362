mod common;

use bevy::prelude::*;
use bevy::time::Virtual;
use neon_swarm::plugins::powerups::PowerupKind;
use neon_swarm::plugins::projectiles::{PooledShot, ShotState};
use neon_swarm::plugins::session::Session;

fn active_shots(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query_filtered::<&ShotState, With<PooledShot>>()
        .iter(world)
        .filter(|state| **state == ShotState::Active)
        .count()
}

fn hold_fire(app: &mut App) {
    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    app.insert_resource(buttons);
}

#[test]
fn holding_fire_activates_a_single_shot() {
    let mut app = common::app_headless();
    app.update();

    hold_fire(&mut app);
    app.update();

    assert_eq!(active_shots(&mut app), 1);
}

#[test]
fn double_shot_fires_two_on_one_trigger_pull() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut()
        .resource_mut::<Session>()
        .set_powerup(PowerupKind::DoubleShot);
    hold_fire(&mut app);
    app.update();

    assert_eq!(active_shots(&mut app), 2);
}

#[test]
fn triple_shot_fires_three_on_one_trigger_pull() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut()
        .resource_mut::<Session>()
        .set_powerup(PowerupKind::TripleShot);
    hold_fire(&mut app);
    app.update();

    assert_eq!(active_shots(&mut app), 3);
}

#[test]
fn firing_is_rejected_while_paused() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut().resource_mut::<Session>().toggle_pause();
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    hold_fire(&mut app);
    app.update();
    app.update();

    assert_eq!(active_shots(&mut app), 0);
}
