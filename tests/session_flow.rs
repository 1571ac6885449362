mod common;

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::Virtual;
use neon_swarm::common::state::GameState;
use neon_swarm::plugins::enemies::spawner::SpawnTimer;
use neon_swarm::plugins::session::{LifeLost, ScoreAward, Session};

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn score_awards_flow_into_the_session() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut().write_message(ScoreAward { multiplier: 2 });
    app.world_mut().write_message(ScoreAward { multiplier: 5 });
    app.update();

    let session = app.world().resource::<Session>();
    assert_eq!(session.score(), 7000);
    assert_eq!(session.high_score(), 7000);
}

#[test]
fn losing_the_last_life_ends_the_game_paused() {
    let mut app = common::app_headless();
    app.update();

    for _ in 0..3 {
        app.world_mut().write_message(LifeLost);
    }
    app.update();

    assert_eq!(app.world().resource::<Session>().lives(), 0);
    assert_eq!(current_state(&app), GameState::InGame);

    // Let the grace delay run out on the clock.
    std::thread::sleep(Duration::from_millis(30));
    app.update();
    app.update();

    assert_eq!(current_state(&app), GameState::GameOver);
    assert!(app.world().resource::<Session>().is_paused());
    assert!(app.world().resource::<Time<Virtual>>().is_paused());
}

#[test]
fn restart_resets_the_session_but_keeps_the_best_score() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut().write_message(ScoreAward { multiplier: 3 });
    for _ in 0..3 {
        app.world_mut().write_message(LifeLost);
    }
    app.update();
    std::thread::sleep(Duration::from_millis(30));
    app.update();
    app.update();
    assert_eq!(current_state(&app), GameState::GameOver);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();

    assert_eq!(current_state(&app), GameState::InGame);
    let session = app.world().resource::<Session>();
    assert_eq!(session.score(), 0);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.high_score(), 3000);
    assert!(!session.is_paused());
    assert!(!app.world().resource::<Time<Virtual>>().is_paused());
}

#[test]
fn pausing_freezes_gameplay_clocks_and_resuming_restores_them() {
    let mut app = common::app_headless();
    app.update();
    app.update();

    // Pause exactly as the input handler does.
    app.world_mut().resource_mut::<Session>().toggle_pause();
    app.world_mut().resource_mut::<Time<Virtual>>().pause();

    let elapsed_at_pause = app.world().resource::<SpawnTimer>().0.elapsed();
    std::thread::sleep(Duration::from_millis(10));
    app.update();
    app.update();

    // Spawn cadence ticks on virtual time, so pause freezes it.
    assert_eq!(
        app.world().resource::<SpawnTimer>().0.elapsed(),
        elapsed_at_pause
    );

    app.world_mut().resource_mut::<Session>().toggle_pause();
    app.world_mut().resource_mut::<Time<Virtual>>().unpause();

    std::thread::sleep(Duration::from_millis(10));
    app.update();
    app.update();

    assert!(app.world().resource::<SpawnTimer>().0.elapsed() > elapsed_at_pause);
}
