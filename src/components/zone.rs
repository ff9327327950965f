//! Interactive zones (doors).
//!
//! Each zone is spawned once from the level layout with a
//! [`MapPosition`](super::mapposition::MapPosition) at its center and a
//! centered [`BoxCollider`](super::boxcollider::BoxCollider). Geometry never
//! changes; only `highlighted` is written, by the zone tracker.

use std::fmt;

use bevy_ecs::prelude::Component;

/// 1-based zone id, strictly increasing with world x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone{}", self.0)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionZone {
    pub id: ZoneId,
    /// Whether the glow outline is visible.
    pub highlighted: bool,
}

impl InteractionZone {
    pub fn new(id: u32) -> Self {
        Self {
            id: ZoneId(id),
            highlighted: false,
        }
    }
}
