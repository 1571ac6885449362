use bevy::prelude::*;

use super::registry::EnemyKindId;

/// Marker carried by every pooled enemy entity, live or dormant.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy {
    pub kind: EnemyKindId,
}

/// Lifecycle of a pooled enemy.
///
/// `Inactive` entities sit on the pool free list with collision filters
/// cleared, so the broad phase never produces pairs for them. `Arming`
/// fades the enemy in; it is visible but still filterless. Only `Active`
/// enemies move, collide and score. `PendingReturn` is the one-frame
/// tombstone between an in-flight kill and the recycle commit, which keeps
/// a second contact in the same physics step from scoring twice.
#[derive(Component, Debug, Clone)]
pub enum EnemyState {
    Inactive,
    Arming { timer: Timer },
    Active,
    PendingReturn,
}

impl EnemyState {
    pub fn arming(delay: f32) -> Self {
        Self::Arming {
            timer: Timer::from_seconds(delay, TimerMode::Once),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Roam-then-rest steering state for wandering kinds.
#[derive(Component, Debug, Default)]
pub struct Wander {
    pub target: Option<Vec2>,
    pub rest: Option<Timer>,
}
