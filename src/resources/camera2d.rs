//! Shared 2D camera resource.
//!
//! `target` is the world point drawn at the screen center. The camera
//! follow system keeps it on the actor while never showing anything outside
//! [`WorldBounds`](crate::resources::worldbounds::WorldBounds).

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Camera2DRes {
    pub target: Vec2,
    pub zoom: f32,
}

impl Default for Camera2DRes {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}
