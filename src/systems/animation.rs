//! Walk-cycle frame selection.
//!
//! [`frame_for`] is the whole state machine: standing shows
//! `stand-{facing}`; walking alternates `walk-{facing}` and
//! `stand-{facing}` every `period_ms` of wall-clock time. [`walk_animation`]
//! applies it to the actor and swaps the sprite's texture key.
use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, Facing};
use crate::components::animation::{FrameKey, WalkAnimation};
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

pub fn frame_for(facing: Facing, moving: bool, wall_ms: u64, period_ms: u64) -> FrameKey {
    if !moving {
        return FrameKey::stand(facing);
    }
    if (wall_ms / period_ms.max(1)) % 2 == 0 {
        FrameKey::walk(facing)
    } else {
        FrameKey::stand(facing)
    }
}

pub fn walk_animation(
    mut query: Query<(&Actor, &mut WalkAnimation, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    for (actor, mut anim, mut sprite) in query.iter_mut() {
        let frame = frame_for(actor.facing, actor.moving, time.wall_ms, anim.period_ms);
        if anim.frame != frame {
            anim.frame = frame;
            sprite.tex_key = frame.texture_key(&anim.texture_prefix);
        }
    }
}
