//! Current-zone state.
//!
//! [`ZoneState`] makes "at most one current zone" structural: the tracker is
//! either away from every door or near exactly one. [`ZoneIndex`] maps door
//! ids to their entities, filled once when the level is built.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::components::zone::ZoneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneState {
    #[default]
    None,
    Near(ZoneId),
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneTracker {
    pub state: ZoneState,
}

impl ZoneTracker {
    pub fn current(&self) -> Option<ZoneId> {
        match self.state {
            ZoneState::None => None,
            ZoneState::Near(id) => Some(id),
        }
    }

    pub fn is_near(&self) -> bool {
        self.current().is_some()
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ZoneIndex {
    by_id: FxHashMap<ZoneId, Entity>,
}

impl ZoneIndex {
    pub fn insert(&mut self, id: ZoneId, entity: Entity) {
        self.by_id.insert(id, entity);
    }

    pub fn get(&self, id: ZoneId) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    /// The zone with the highest id (the last door along the wall).
    pub fn last(&self) -> Option<(ZoneId, Entity)> {
        self.by_id
            .iter()
            .max_by_key(|(id, _)| **id)
            .map(|(id, e)| (*id, *e))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}
