//! Per-frame keyboard input resource.
//!
//! The substrate reports which keys are held through [`InputState::set`];
//! press/release edges are derived here so the core does not depend on the
//! host's key event model. Edges last one frame and are cleared by
//! [`InputState::end_frame`].

use bevy_ecs::prelude::*;

/// Logical keyboard actions the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Walk left (default: Left arrow).
    Left,
    /// Walk right (default: Right arrow).
    Right,
    /// Interact with the current door (default: Space).
    Interact,
    /// Rebuild the scene (default: R).
    Restart,
    /// Toggle debug overlays (default: F11).
    ToggleDebug,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with edge flags.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was released this frame.
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, down: bool) {
        if down && !self.active {
            self.just_pressed = true;
        }
        if !down && self.active {
            self.just_released = true;
        }
        self.active = down;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub interact: BoolState,
    pub restart: BoolState,
    pub toggle_debug: BoolState,
}

impl InputState {
    fn state_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Interact => &mut self.interact,
            InputAction::Restart => &mut self.restart,
            InputAction::ToggleDebug => &mut self.toggle_debug,
        }
    }

    pub fn get(&self, action: InputAction) -> BoolState {
        match action {
            InputAction::Left => self.left,
            InputAction::Right => self.right,
            InputAction::Interact => self.interact,
            InputAction::Restart => self.restart,
            InputAction::ToggleDebug => self.toggle_debug,
        }
    }

    /// Record whether `action`'s key is held this frame.
    pub fn set(&mut self, action: InputAction, down: bool) {
        self.state_mut(action).update(down);
    }

    /// Clear press/release edges once the frame has consumed them.
    pub fn end_frame(&mut self) {
        self.left.clear_edges();
        self.right.clear_edges();
        self.interact.clear_edges();
        self.restart.clear_edges();
        self.toggle_debug.clear_edges();
    }
}
