//! Global state machine.
//!
//! Pause is intentionally *not* a state here: leaving `InGame` would tear
//! down every `DespawnOnExit(GameState::InGame)` entity (player, walls).
//! Pausing instead freezes virtual time and flips `Session::is_paused`,
//! so a resumed game picks up timers exactly where they stopped.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    GameOver,
}
