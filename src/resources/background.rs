use bevy_ecs::prelude::Resource;

/// Horizontal scroll of the tiled background, in texture pixels.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Background {
    pub tile_position_x: f32,
    /// Pixels scrolled per tick while walking.
    pub step: f32,
}

impl Background {
    pub fn new(step: f32) -> Self {
        Self {
            tile_position_x: 0.0,
            step,
        }
    }
}
