//! "Zones passed" milestone.
//!
//! `highest_passed` walks from 0 up to `total` and never goes back. Reaching
//! `total` for the first time opens the world; `boundary_built` records that
//! the expansion already happened so it is never repeated.

use bevy_ecs::prelude::Resource;

use crate::components::zone::ZoneId;

/// Result of offering a zone to [`Milestone::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Zone already passed (or lower); nothing changed.
    Ignored,
    /// `highest_passed` moved up.
    Advanced,
    /// `highest_passed` moved up and hit `total` for the first time.
    Terminal,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub highest_passed: u32,
    pub total: u32,
    pub boundary_built: bool,
}

impl Milestone {
    pub fn new(total: u32) -> Self {
        Self {
            highest_passed: 0,
            total,
            boundary_built: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.total > 0 && self.highest_passed >= self.total
    }

    /// Mark `zone` as passed.
    pub fn advance(&mut self, zone: ZoneId) -> Advance {
        if zone.0 <= self.highest_passed {
            return Advance::Ignored;
        }
        self.highest_passed = zone.0;
        if self.is_terminal() && !self.boundary_built {
            self.boundary_built = true;
            Advance::Terminal
        } else {
            Advance::Advanced
        }
    }
}
