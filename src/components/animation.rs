//! Walk-cycle animation state.
//!
//! The actor has four frames: standing and walking, each facing left or
//! right. [`WalkAnimation`] stores the frame selected on the last tick and
//! the half-period of the walk cycle. Frame selection itself lives in
//! [`crate::systems::animation`].

use std::fmt;

use bevy_ecs::prelude::Component;

use crate::components::actor::Facing;

/// One of the four actor frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKey {
    StandLeft,
    StandRight,
    WalkLeft,
    WalkRight,
}

impl FrameKey {
    pub fn stand(facing: Facing) -> Self {
        match facing {
            Facing::Left => FrameKey::StandLeft,
            Facing::Right => FrameKey::StandRight,
        }
    }

    pub fn walk(facing: Facing) -> Self {
        match facing {
            Facing::Left => FrameKey::WalkLeft,
            Facing::Right => FrameKey::WalkRight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKey::StandLeft => "stand-left",
            FrameKey::StandRight => "stand-right",
            FrameKey::WalkLeft => "walk-left",
            FrameKey::WalkRight => "walk-right",
        }
    }

    /// Texture key the substrate registered for this frame.
    pub fn texture_key(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.as_str())
    }
}

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Component, Debug, Clone)]
pub struct WalkAnimation {
    /// Frame chosen on the most recent tick.
    pub frame: FrameKey,
    /// Milliseconds each half of the walk cycle lasts.
    pub period_ms: u64,
    /// Prefix of the texture keys, e.g. `friar`.
    pub texture_prefix: String,
}

impl WalkAnimation {
    pub fn new(texture_prefix: impl Into<String>, period_ms: u64, facing: Facing) -> Self {
        Self {
            frame: FrameKey::stand(facing),
            period_ms,
            texture_prefix: texture_prefix.into(),
        }
    }
}
