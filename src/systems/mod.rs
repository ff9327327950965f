//! Scene systems.
//!
//! This module groups all ECS systems that advance the simulation each
//! tick, in the order the scene schedule runs them.
//!
//! Submodules overview
//! - [`scheduler`] – fire due deferred callbacks as timer events
//! - [`input`] – merge keyboard and touch into [`crate::resources::intent::MoveIntent`]
//! - [`inputsimplecontroller`] – translate intent into velocity and facing
//! - [`movement`] – integrate velocity and gravity, collide with solids, clamp to bounds
//! - [`zonetracker`] – current door, highlight, milestone trigger
//! - [`animation`] – pick the walk-cycle frame
//! - [`camera`] – follow the actor inside the world bounds
//! - [`background`] – scroll the tiled background while walking
//! - [`gamestate`] – run conditions on the scene state
//! - [`time`] – update simulation time and wall clock

pub mod animation;
pub mod background;
pub mod camera;
pub mod gamestate;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod scheduler;
pub mod time;
pub mod zonetracker;
