//! Buffered fire requests.
//!
//! Producers enqueue intent; the allocator is the single writer that pops
//! the pool and applies component writes. A triple-shot frame is just three
//! requests with different offsets.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub origin: Vec2,
    /// Aim direction in radians.
    pub base_angle: f32,
    /// Spread offset applied on top of `base_angle`.
    pub angle_offset: f32,
}

impl FireRequest {
    pub fn angle(&self) -> f32 {
        self.base_angle + self.angle_offset
    }
}
