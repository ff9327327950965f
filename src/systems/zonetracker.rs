//! Actor vs door overlap.
//!
//! Every tick the actor's box is tested against every [`InteractionZone`].
//! When several overlap the lowest id wins; the winner is the only
//! highlighted zone and becomes [`ZoneState::Near`]. Passing the center of
//! the current door raises a [`MilestonePassedEvent`] unless that door (or a
//! later one) was already passed.
use bevy_ecs::prelude::*;
use log::debug;
use smallvec::SmallVec;

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::zone::{InteractionZone, ZoneId};
use crate::events::milestone::MilestonePassedEvent;
use crate::resources::milestone::Milestone;
use crate::resources::zonetracker::{ZoneState, ZoneTracker};

/// Pick the current zone among the overlapped ones: lowest id wins.
pub fn pick_current(overlapping: &[(ZoneId, f32)]) -> Option<(ZoneId, f32)> {
    overlapping.iter().copied().min_by_key(|(id, _)| *id)
}

pub fn zone_tracker(
    actor: Query<(&MapPosition, &BoxCollider), With<Actor>>,
    mut zones: Query<(&mut InteractionZone, &MapPosition, &BoxCollider), Without<Actor>>,
    mut tracker: ResMut<ZoneTracker>,
    milestone: Res<Milestone>,
    mut commands: Commands,
) {
    let Ok((actor_pos, actor_box)) = actor.single() else {
        return;
    };

    let overlapping: SmallVec<[(ZoneId, f32); 4]> = zones
        .iter()
        .filter(|(_, pos, collider)| actor_box.overlaps(actor_pos.pos, collider, pos.pos))
        .map(|(zone, pos, _)| (zone.id, pos.x()))
        .collect();
    let current = pick_current(&overlapping);

    for (mut zone, _, _) in zones.iter_mut() {
        let lit = current.is_some_and(|(id, _)| id == zone.id);
        if zone.highlighted != lit {
            zone.highlighted = lit;
        }
    }

    let state = match current {
        Some((id, _)) => ZoneState::Near(id),
        None => ZoneState::None,
    };
    if tracker.state != state {
        debug!("zone state {:?} -> {:?}", tracker.state, state);
        tracker.state = state;
    }

    if let Some((id, zone_x)) = current {
        if actor_pos.x() > zone_x && id.0 > milestone.highest_passed {
            commands.trigger(MilestonePassedEvent { zone: id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_id_wins() {
        let hits = [(ZoneId(3), 850.0), (ZoneId(2), 550.0)];
        assert_eq!(pick_current(&hits), Some((ZoneId(2), 550.0)));
    }

    #[test]
    fn nothing_overlapped() {
        assert_eq!(pick_current(&[]), None);
    }
}
