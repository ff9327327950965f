//! Input-controlled movement component.
//!
//! Entities with [`InputControlled`] are driven by the per-tick
//! [`MoveIntent`](crate::resources::intent::MoveIntent) in
//! [`crate::systems::inputsimplecontroller`].

use bevy_ecs::prelude::Component;

/// Horizontal speed applied while a direction is requested.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Speed in world units per second.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
