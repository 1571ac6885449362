//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,

    /// Playfield half extents. The arena is a single fixed screen.
    pub arena_half_width: f32,
    pub arena_half_height: f32,

    pub player_speed: f32,
    /// Seconds between player shots.
    pub fire_cooldown: f32,
    pub shot_speed: f32,
    /// Radian offset used by multi-shot power-ups.
    pub spread_offset: f32,

    /// Seconds between spawn waves.
    pub enemy_spawn_cooldown: f32,
    /// Enemies spawned per wave, inclusive range. Clamped to at least 1.
    pub wave_size_min: i32,
    pub wave_size_max: i32,
    pub max_enemies: u32,

    /// Grid layout for formation spawns.
    pub formation_spacing: f32,
    pub formation_columns: u32,

    /// Rest time between wander targets, seconds.
    pub wander_rest: f32,

    pub base_points_per_hit: u64,
    pub starting_lives: u32,
    /// Delay between losing the last life and entering game over, seconds.
    pub game_over_grace: f32,

    /// Seconds between power-up drops.
    pub powerup_spawn_interval: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            arena_half_width: 400.0,
            arena_half_height: 300.0,
            player_speed: 200.0,
            fire_cooldown: 0.2,
            shot_speed: 400.0,
            spread_offset: 0.05,
            enemy_spawn_cooldown: 5.0,
            wave_size_min: 3,
            wave_size_max: 7,
            max_enemies: 50,
            formation_spacing: 40.0,
            formation_columns: 3,
            wander_rest: 2.0,
            base_points_per_hit: 1000,
            starting_lives: 3,
            game_over_grace: 0.02,
            powerup_spawn_interval: 15.0,
        }
    }
}

impl Tunables {
    /// Wave size range with malformed configuration clamped to valid values.
    pub fn wave_size_range(&self) -> std::ops::RangeInclusive<i32> {
        let lo = self.wave_size_min.max(1);
        let hi = self.wave_size_max.max(lo);
        lo..=hi
    }
}
