//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity the motion controller asks for plus the
//! constant gravity the movement system integrates.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity and its gravity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Constant acceleration in world units per second squared.
    pub gravity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body pulled down by `gravity` px/s².
    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity: Vec2::new(0.0, gravity),
        }
    }

    pub fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }
}
