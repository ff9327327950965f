//! Milestone transitions and the one-time world expansion.
//!
//! The zone tracker raises [`MilestonePassedEvent`] when the actor is past
//! the center of the current door and that door's id is above
//! `highest_passed`. [`milestone_observer`] records it; the first time the
//! last door is passed it builds the boundary wall, grows
//! [`WorldBounds`] to cover it and lays ground under the new stretch.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::scenemember::SceneMember;
use crate::components::solid::{BoundaryWall, Ground, Solid};
use crate::components::zone::ZoneId;
use crate::resources::level::LevelLayout;
use crate::resources::milestone::{Advance, Milestone};
use crate::resources::worldbounds::WorldBounds;
use crate::resources::zonetracker::ZoneIndex;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestonePassedEvent {
    pub zone: ZoneId,
}

pub fn milestone_observer(
    trigger: On<MilestonePassedEvent>,
    mut milestone: ResMut<Milestone>,
    mut bounds: ResMut<WorldBounds>,
    layout: Res<LevelLayout>,
    index: Res<ZoneIndex>,
    positions: Query<&MapPosition>,
    mut commands: Commands,
) {
    let zone = trigger.event().zone;
    match milestone.advance(zone) {
        Advance::Ignored => {
            debug!("{} already passed (highest {})", zone, milestone.highest_passed);
        }
        Advance::Advanced => {
            info!("passed {} of {}", zone.0, milestone.total);
        }
        Advance::Terminal => {
            info!("passed {} of {}, opening the world", zone.0, milestone.total);
            let Some(last_x) = index
                .last()
                .and_then(|(_, entity)| positions.get(entity).ok())
                .map(|pos| pos.x())
            else {
                warn!("terminal milestone with no zones indexed");
                return;
            };

            let (wall_center, wall_size) = layout.boundary_wall(last_x);
            let wall = BoxCollider::centered(wall_size.x, wall_size.y);
            commands.spawn((
                BoundaryWall,
                Solid,
                MapPosition::new(wall_center.x, wall_center.y),
                wall,
                SceneMember,
            ));

            let old_max_x = bounds.max_x;
            let (min, max) = wall.aabb(wall_center);
            if bounds.include(min, max) {
                let (ground_center, ground_size) = layout.ground_slab(old_max_x, bounds.max_x);
                commands.spawn((
                    Ground,
                    Solid,
                    MapPosition::new(ground_center.x, ground_center.y),
                    BoxCollider::centered(ground_size.x, ground_size.y),
                    SceneMember,
                ));
                info!(
                    "world bounds grown: max_x {} -> {}",
                    old_max_x, bounds.max_x
                );
            }
        }
    }
}
