//! The player-controlled actor.
//!
//! [`Actor`] holds the facing/moving half of the actor state; position and
//! velocity live in [`MapPosition`](super::mapposition::MapPosition) and
//! [`RigidBody`](super::rigidbody::RigidBody). Only the motion controller
//! writes `facing` and `moving`.

use bevy_ecs::prelude::Component;

/// Horizontal direction the actor looks at. Retained while standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actor {
    pub facing: Facing,
    pub moving: bool,
}

impl Actor {
    pub fn new(facing: Facing) -> Self {
        Self {
            facing,
            moving: false,
        }
    }
}
