//! Static collision surfaces.
//!
//! The movement system pushes the actor out of every entity tagged
//! [`Solid`]. The ground slab and the boundary wall built by the milestone
//! observer are both solids; [`BoundaryWall`] additionally marks the wall so
//! the frontend and tests can find it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Solid;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BoundaryWall;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Ground;
