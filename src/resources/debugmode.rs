//! Debug toggle resource.
//!
//! When present, the frontend draws collider outlines and the current zone
//! state.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
