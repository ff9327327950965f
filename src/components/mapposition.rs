//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in world pixels. For the actor
//! it is the sprite center; zones, ground slabs and walls also store their
//! center here and pair it with a centered
//! [`BoxCollider`](super::boxcollider::BoxCollider).

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }
}
