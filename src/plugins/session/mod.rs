//! Session plugin: score, lives, pause and game over.
//!
//! All session truth lives in one `Session` resource and is mutated only
//! through its methods. Other plugins report outcomes via messages
//! (`ScoreAward`, `LifeLost`) produced by the collision resolvers; the
//! systems here are the single consumers, so scoring and life loss stay in
//! one predictable place.
//!
//! Pausing freezes Bevy's virtual clock. Every gameplay timer (spawn
//! cooldown, arming, wander rest, game-over grace) ticks on virtual time,
//! so pause/resume loses no state and re-triggers nothing.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::time::Virtual;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::powerups::PowerupKind;

pub mod persistence;

use persistence::HighScoreStore;

/// Game-wide mutable state. The single source of truth for score, lives,
/// pause and the player's active power-up.
#[derive(Resource, Debug)]
pub struct Session {
    score: u64,
    high_score: u64,
    lives: u32,
    is_paused: bool,
    active_powerup: Option<PowerupKind>,
}

impl Session {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            lives,
            is_paused: false,
            active_powerup: None,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn active_powerup(&self) -> Option<PowerupKind> {
        self.active_powerup
    }

    pub fn set_powerup(&mut self, kind: PowerupKind) {
        self.active_powerup = Some(kind);
    }

    /// Award `base_points * multiplier`. Returns true when this strictly
    /// beat the stored high score.
    pub fn award(&mut self, base_points: u64, multiplier: u64) -> bool {
        self.score += base_points * multiplier;
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    pub fn set_high_score(&mut self, high_score: u64) {
        self.high_score = high_score;
    }

    /// Decrement lives, saturating at zero. Returns the remaining count.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Consume an active Shield, if any. Returns true when a shield
    /// absorbed the hit.
    pub fn consume_shield(&mut self) -> bool {
        if self.active_powerup == Some(PowerupKind::Shield) {
            self.active_powerup = None;
            true
        } else {
            false
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.is_paused = !self.is_paused;
        self.is_paused
    }

    pub fn force_pause(&mut self) {
        self.is_paused = true;
    }

    /// Reset for a fresh round. The high score survives.
    pub fn reset(&mut self, lives: u32) {
        self.score = 0;
        self.lives = lives;
        self.is_paused = false;
        self.active_powerup = None;
    }
}

/// Run condition: the session is not paused.
pub fn session_running(session: Res<Session>) -> bool {
    !session.is_paused
}

/// A destroyed enemy was worth `multiplier` times the base points.
#[derive(Message, Clone, Copy, Debug)]
pub struct ScoreAward {
    pub multiplier: u32,
}

/// The player took an unshielded hit from an armed enemy.
#[derive(Message, Clone, Copy, Debug)]
pub struct LifeLost;

/// Pending transition into game over, armed when the last life is lost.
/// The short delay lets the destruction effect of the fatal hit render.
#[derive(Resource, Default, Debug)]
pub struct GameOverGrace(pub Option<Timer>);

pub fn plugin(app: &mut App) {
    let lives = app.world().resource::<Tunables>().starting_lives;

    app.insert_resource(Session::new(lives))
        .insert_resource(GameOverGrace::default())
        .insert_resource(HighScoreStore::default_location());

    app.init_resource::<Messages<ScoreAward>>();
    app.init_resource::<Messages<LifeLost>>();
    app.add_systems(PostUpdate, update_session_messages);

    app.add_systems(Startup, load_high_score);

    app.add_systems(
        Update,
        (apply_score, apply_life_lost, tick_game_over_grace)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        Update,
        toggle_pause_input.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(OnEnter(GameState::GameOver), force_pause_on_game_over);
    app.add_systems(Update, restart_input.run_if(in_state(GameState::GameOver)));
    app.add_systems(OnEnter(GameState::InGame), reset_session);
}

/// Maintain session message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_session_messages(
    mut scores: ResMut<Messages<ScoreAward>>,
    mut lives: ResMut<Messages<LifeLost>>,
) {
    scores.update();
    lives.update();
}

fn load_high_score(store: Res<HighScoreStore>, mut session: ResMut<Session>) {
    match store.load() {
        Ok(high_score) => session.set_high_score(high_score),
        // Best effort: a missing or unreadable save keeps the score
        // session-local.
        Err(err) => warn!("high score unavailable: {err:#}"),
    }
}

pub fn apply_score(
    mut awards: MessageReader<ScoreAward>,
    tunables: Res<Tunables>,
    store: Res<HighScoreStore>,
    mut session: ResMut<Session>,
) {
    for award in awards.read() {
        let new_best = session.award(tunables.base_points_per_hit, award.multiplier as u64);
        if new_best {
            // Fire-and-forget; persistence failure is non-fatal.
            if let Err(err) = store.save(session.high_score()) {
                warn!("failed to persist high score: {err:#}");
            }
        }
    }
}

pub fn apply_life_lost(
    mut hits: MessageReader<LifeLost>,
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    mut grace: ResMut<GameOverGrace>,
) {
    for _ in hits.read() {
        if session.lose_life() == 0 && grace.0.is_none() {
            grace.0 = Some(Timer::from_seconds(
                tunables.game_over_grace,
                TimerMode::Once,
            ));
        }
    }
}

pub fn tick_game_over_grace(
    time: Res<Time>,
    mut grace: ResMut<GameOverGrace>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(timer) = grace.0.as_mut() else { return };
    timer.tick(time.delta());
    if timer.is_finished() {
        grace.0 = None;
        next.set(GameState::GameOver);
    }
}

fn toggle_pause_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut session: ResMut<Session>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    let Some(keys) = keys else { return };
    if !keys.just_pressed(KeyCode::Escape) && !keys.just_pressed(KeyCode::KeyP) {
        return;
    }

    if session.toggle_pause() {
        virtual_time.pause();
    } else {
        virtual_time.unpause();
    }
}

fn force_pause_on_game_over(
    mut session: ResMut<Session>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    session.force_pause();
    virtual_time.pause();
    info!(
        "game over: score {} (best {})",
        session.score(),
        session.high_score()
    );
}

fn restart_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else { return };
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    virtual_time.unpause();
    next.set(GameState::InGame);
}

fn reset_session(
    mut session: ResMut<Session>,
    tunables: Res<Tunables>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    session.reset(tunables.starting_lives);
    virtual_time.unpause();
}
