//! Touch-edge input.
//!
//! The substrate forwards raw pointer events as [`TouchEvent`] messages.
//! [`TouchState`] turns them into held left/right flags: the outer edge
//! bands of the screen walk, the middle band stops, and a middle tap while
//! a door is current is handed back as an interact instead.

use bevy_ecs::prelude::*;

/// Raw pointer event from the substrate.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger down at client `x` on a viewport `screen_width` wide.
    Start { x: f32, screen_width: f32 },
    End,
    Cancel,
}

/// Horizontal band a touch landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchBand {
    Left,
    Middle,
    Right,
}

/// What a touch event did to the touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Movement flags were rewritten.
    Movement,
    /// The tap was consumed as an interact; flags untouched.
    Interact,
}

/// Classify `x` against edge bands `edge_fraction` of the screen wide.
pub fn classify(x: f32, screen_width: f32, edge_fraction: f32) -> TouchBand {
    let edge = screen_width * edge_fraction;
    if x < edge {
        TouchBand::Left
    } else if x > screen_width - edge {
        TouchBand::Right
    } else {
        TouchBand::Middle
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TouchState {
    pub left: bool,
    pub right: bool,
    pub edge_fraction: f32,
}

impl Default for TouchState {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl TouchState {
    pub fn new(edge_fraction: f32) -> Self {
        Self {
            left: false,
            right: false,
            edge_fraction,
        }
    }

    /// Apply one touch event. `zone_current` tells whether a door is
    /// currently overlapped, which turns middle taps into interacts.
    pub fn apply(&mut self, event: TouchEvent, zone_current: bool) -> TouchOutcome {
        match event {
            TouchEvent::Start { x, screen_width } => {
                match classify(x, screen_width, self.edge_fraction) {
                    TouchBand::Middle if zone_current => return TouchOutcome::Interact,
                    TouchBand::Left => {
                        self.left = true;
                        self.right = false;
                    }
                    TouchBand::Right => {
                        self.right = true;
                        self.left = false;
                    }
                    TouchBand::Middle => self.clear(),
                }
            }
            // a lost finger must never leave a stuck direction
            TouchEvent::End | TouchEvent::Cancel => self.clear(),
        }
        TouchOutcome::Movement
    }

    pub fn clear(&mut self) {
        self.left = false;
        self.right = false;
    }
}
