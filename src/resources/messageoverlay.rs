//! The single transient message.
//!
//! At most one message entity exists. Showing a new one replaces the old one
//! and its dismissal timer; nothing is queued. The spawn/despawn and timer
//! bookkeeping happens in
//! [`crate::events::message::show_message_observer`]; this resource only
//! remembers what is on screen.

use bevy_ecs::prelude::{Entity, Resource};

use crate::resources::scheduler::TimerToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMessage {
    pub entity: Entity,
    pub text: String,
    /// Pending auto-dismiss callback.
    pub dismiss: TimerToken,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct MessageOverlay {
    current: Option<ShownMessage>,
    /// How many times a message was shown since the scene started.
    pub shown_count: u32,
}

impl MessageOverlay {
    pub fn current(&self) -> Option<&ShownMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    /// Install `message`, handing back the one it replaces.
    pub fn replace(&mut self, message: ShownMessage) -> Option<ShownMessage> {
        self.shown_count += 1;
        self.current.replace(message)
    }

    /// Take the current message if `token` is still its dismissal timer.
    /// A stale token leaves the overlay alone.
    pub fn dismiss(&mut self, token: TimerToken) -> Option<ShownMessage> {
        match &self.current {
            Some(m) if m.dismiss == token => self.current.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::scheduler::{DeferredAction, Scheduler};
    use bevy_ecs::world::World;

    fn message(entity: Entity, dismiss: TimerToken) -> ShownMessage {
        ShownMessage {
            entity,
            text: "hi".to_string(),
            dismiss,
        }
    }

    #[test]
    fn replace_returns_previous() {
        let mut s = Scheduler::new();
        let t1 = s.schedule(2.0, DeferredAction::DismissMessage);
        let t2 = s.schedule(2.0, DeferredAction::DismissMessage);
        let mut world = World::new();
        let (e1, e2) = (world.spawn_empty().id(), world.spawn_empty().id());
        let mut overlay = MessageOverlay::default();
        assert!(overlay.replace(message(e1, t1)).is_none());
        let old = overlay.replace(message(e2, t2));
        assert_eq!(old.map(|m| m.dismiss), Some(t1));
        assert_eq!(overlay.shown_count, 2);
    }

    #[test]
    fn stale_token_does_not_dismiss() {
        let mut s = Scheduler::new();
        let t1 = s.schedule(2.0, DeferredAction::DismissMessage);
        let t2 = s.schedule(2.0, DeferredAction::DismissMessage);
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut overlay = MessageOverlay::default();
        overlay.replace(message(e, t2));
        assert!(overlay.dismiss(t1).is_none());
        assert_eq!(overlay.text(), Some("hi"));
        assert!(overlay.dismiss(t2).is_some());
        assert!(overlay.current().is_none());
    }
}
