//! Screen-space position component.
//!
//! Used for overlay text that must not scroll with the camera. For
//! world-space entities see [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vec2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
