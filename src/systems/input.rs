//! Input aggregation systems.
//!
//! - [`aggregate_input`] folds this frame's [`TouchEvent`] messages into
//!   [`TouchState`], merges it with the held keys in [`InputState`] and
//!   writes the result to [`MoveIntent`]. Interact triggers from either
//!   source become an [`InteractEvent`].
//! - [`toggle_debug_from_input`] emits a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) on
//!   the debug key's press edge.
//! - [`update_touch_messages`] rotates the touch message buffers at the end
//!   of the frame.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::input::{InteractEvent, InteractSource};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;
use crate::resources::intent::MoveIntent;
use crate::resources::touch::{TouchEvent, TouchOutcome, TouchState};
use crate::resources::zonetracker::ZoneTracker;

pub fn aggregate_input(
    input: Res<InputState>,
    mut touch: ResMut<TouchState>,
    mut touches: MessageReader<TouchEvent>,
    tracker: Res<ZoneTracker>,
    mut intent: ResMut<MoveIntent>,
    mut commands: Commands,
) {
    let zone_current = tracker.is_near();
    let mut interact = false;

    for event in touches.read() {
        if touch.apply(*event, zone_current) == TouchOutcome::Interact {
            debug!("middle tap while near {:?}", tracker.current());
            interact = true;
            commands.trigger(InteractEvent {
                source: InteractSource::Touch,
            });
        }
    }

    if input.interact.just_pressed {
        interact = true;
        commands.trigger(InteractEvent {
            source: InteractSource::Keyboard,
        });
    }

    *intent = MoveIntent {
        left: input.left.active || touch.left,
        right: input.right.active || touch.right,
        interact,
    };
}

pub fn toggle_debug_from_input(input: Res<InputState>, mut commands: Commands) {
    if input.toggle_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

pub fn update_touch_messages(mut messages: ResMut<Messages<TouchEvent>>) {
    messages.update();
}
