//! Interact trigger.
//!
//! [`InteractEvent`] is raised by [`crate::systems::input::aggregate_input`]
//! for a middle-band tap while a door is current, or for the keyboard
//! interact key. [`interact_observer`] turns it into the door message, and
//! silently ignores it when no door is current.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::message::ShowMessageEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::zonetracker::ZoneTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractSource {
    Touch,
    Keyboard,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct InteractEvent {
    pub source: InteractSource,
}

pub fn interact_observer(
    trigger: On<InteractEvent>,
    tracker: Res<ZoneTracker>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let Some(zone) = tracker.current() else {
        trace!("interact ({:?}) with no current zone ignored", trigger.event().source);
        return;
    };
    trace!("interact ({:?}) at {}", trigger.event().source, zone);
    commands.trigger(ShowMessageEvent {
        text: config.door_message.clone(),
    });
}
