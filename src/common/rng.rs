//! Seedable game RNG.
//!
//! All spawn rolls go through one RNG resource so tests can seed it and
//! replay exact spawn sequences.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
