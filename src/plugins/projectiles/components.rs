use bevy::prelude::*;

/// Marker for every pooled shot entity, live or dormant.
#[derive(Component)]
pub struct PooledShot;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// Per-shot fire data, reset on every activation.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Shot {
    /// Radians off the aim angle; non-zero for spread-fire shots.
    pub angle_offset: f32,
}
