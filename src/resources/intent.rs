//! Merged per-tick movement request.

use bevy_ecs::prelude::Resource;

/// Directional and interact request, recomputed every tick from keyboard and
/// touch by [`crate::systems::input::aggregate_input`].
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    /// An interact trigger was raised this tick.
    pub interact: bool,
}
