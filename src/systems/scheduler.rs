//! Deferred callback driver.
//!
//! Advances [`Scheduler`] by the scaled frame delta and triggers a
//! [`TimerEvent`] for each callback that came due, in scheduling order.
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::timer::TimerEvent;
use crate::resources::scheduler::Scheduler;
use crate::resources::worldtime::WorldTime;

pub fn update_scheduler(
    mut scheduler: ResMut<Scheduler>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (token, action) in scheduler.advance(time.delta) {
        trace!("timer {:?} due: {:?}", token, action);
        commands.trigger(TimerEvent { token, action });
    }
}
