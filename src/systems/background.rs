//! Parallax background scroll: the tile offset moves a fixed step per tick
//! in the walking direction.
use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, Facing};
use crate::resources::background::Background;

pub fn background_scroll(actor: Query<&Actor>, mut background: ResMut<Background>) {
    let Ok(actor) = actor.single() else {
        return;
    };
    if !actor.moving {
        return;
    }
    let step = background.step;
    match actor.facing {
        Facing::Left => background.tile_position_x -= step,
        Facing::Right => background.tile_position_x += step,
    }
}
