//! Enemy archetype catalog.
//!
//! One immutable `EnemyKind` per archetype, built once at startup and read
//! everywhere else. Behavior is driven by independent flags, not by
//! type-code special cases; a kind that must never come out of the random
//! spawn roll opts out with `random_spawn: false` instead of being filtered
//! by id at call sites.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::error::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyKindId(pub u8);

#[derive(Debug, Clone)]
pub struct EnemyKind {
    pub id: EnemyKindId,
    pub name: &'static str,
    /// Units per second; 0 for stationary kinds.
    pub base_speed: f32,
    pub targets_player: bool,
    pub score_multiplier: u32,
    pub rotates: bool,
    pub wanders: bool,
    /// Seconds between spawn and becoming collidable.
    pub arming_delay: f32,
    /// Instances produced per spawn call, laid out as a grid when > 1.
    pub formation_size: u32,
    /// Eligible for the random spawn roll.
    pub random_spawn: bool,
    pub color: Color,
}

#[derive(Resource, Debug)]
pub struct EnemyRegistry {
    kinds: Vec<EnemyKind>,
}

impl EnemyRegistry {
    pub fn catalog() -> Self {
        let kinds = vec![
            EnemyKind {
                id: EnemyKindId(0),
                name: "pinwheel",
                base_speed: 200.0,
                targets_player: false,
                score_multiplier: 1,
                rotates: true,
                wanders: false,
                arming_delay: 3.0,
                formation_size: 1,
                random_spawn: true,
                color: Color::srgb_u8(0xF7, 0x40, 0xE3),
            },
            EnemyKind {
                id: EnemyKindId(1),
                name: "diamond",
                base_speed: 150.0,
                targets_player: true,
                score_multiplier: 2,
                rotates: true,
                wanders: false,
                arming_delay: 3.0,
                formation_size: 9,
                random_spawn: true,
                color: Color::srgb_u8(0x40, 0xF4, 0xF7),
            },
            EnemyKind {
                id: EnemyKindId(2),
                name: "green_square",
                base_speed: 250.0,
                targets_player: true,
                score_multiplier: 3,
                rotates: true,
                wanders: false,
                arming_delay: 3.0,
                formation_size: 1,
                random_spawn: true,
                color: Color::srgb_u8(0x0F, 0xB2, 0x19),
            },
            EnemyKind {
                id: EnemyKindId(3),
                name: "pink_square",
                base_speed: 250.0,
                targets_player: true,
                score_multiplier: 4,
                rotates: true,
                wanders: false,
                arming_delay: 3.0,
                formation_size: 1,
                random_spawn: true,
                color: Color::srgb_u8(0xB2, 0x0F, 0x72),
            },
            EnemyKind {
                id: EnemyKindId(4),
                name: "black_hole",
                base_speed: 0.0,
                targets_player: false,
                score_multiplier: 5,
                rotates: true,
                wanders: false,
                arming_delay: 3.0,
                formation_size: 1,
                // Catalog member, but never rolled by the spawner.
                random_spawn: false,
                color: Color::srgb_u8(0x30, 0x30, 0x3A),
            },
            EnemyKind {
                id: EnemyKindId(5),
                name: "yellow_triangle",
                base_speed: 400.0,
                targets_player: false,
                score_multiplier: 6,
                rotates: false,
                wanders: true,
                arming_delay: 3.0,
                formation_size: 1,
                random_spawn: true,
                color: Color::srgb_u8(0xDE, 0xD2, 0x1D),
            },
            EnemyKind {
                id: EnemyKindId(6),
                name: "red_box",
                base_speed: 100.0,
                targets_player: false,
                score_multiplier: 3,
                rotates: true,
                wanders: false,
                arming_delay: 3.0,
                formation_size: 1,
                random_spawn: true,
                color: Color::srgb_u8(0xB2, 0x2F, 0x2F),
            },
        ];

        Self { kinds }
    }

    pub fn get(&self, id: EnemyKindId) -> Result<&EnemyKind, RegistryError> {
        self.kinds
            .iter()
            .find(|k| k.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// Uniform-random kind among those eligible for random spawning.
    pub fn random(&self, rng: &mut impl Rng) -> &EnemyKind {
        let eligible: Vec<&EnemyKind> = self.kinds.iter().filter(|k| k.random_spawn).collect();
        eligible
            .choose(rng)
            .expect("catalog must contain at least one randomly spawnable kind")
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyKind> {
        self.kinds.iter()
    }
}
