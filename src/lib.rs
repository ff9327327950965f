//! Mission Walk library.
//!
//! A friar walks along a mission wall past a row of doors. This crate holds
//! the character controller core: input aggregation, motion, the walk-cycle
//! animation, door proximity, the one-time world expansion and the door
//! message. It exposes the ECS components, resources, systems and events
//! for use in integration tests and by the frontends in `main.rs`.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;

#[cfg(feature = "window")]
pub mod frontend;
