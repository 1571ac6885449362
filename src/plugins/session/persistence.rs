//! Best-effort high score persistence.
//!
//! The save file is plain JSON next to the executable's working directory.
//! Storage may be unavailable (read-only filesystem, missing permissions);
//! callers treat every failure as non-fatal and keep the score
//! session-local.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

const SAVE_FILE: &str = "neon-swarm-save.json";

#[derive(Serialize, Deserialize, Default)]
struct SaveFile {
    high_score: u64,
}

#[derive(Resource, Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_location() -> Self {
        Self::new(PathBuf::from(SAVE_FILE))
    }

    pub fn load(&self) -> Result<u64> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let data: SaveFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(data.high_score)
    }

    pub fn save(&self, high_score: u64) -> Result<()> {
        let data = SaveFile { high_score };
        let raw = serde_json::to_string(&data).context("serializing high score")?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
