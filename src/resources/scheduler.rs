//! One-shot deferred callbacks with cancel tokens.
//!
//! The scene has two delayed actions: spawning the actor once assets are
//! ready and dismissing the door message. Both go through [`Scheduler`],
//! which counts down simulation time. [`Scheduler::advance`] is called by
//! [`crate::systems::scheduler::update_scheduler`], which triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) per callback that came due.
//!
//! Canceling removes the callback, so it can never fire afterwards.

use bevy_ecs::prelude::Resource;

/// Handle returned by [`Scheduler::schedule`], used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// What to do when a scheduled callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Asset-ready gate: instantiate the actor and start playing.
    SpawnActor,
    /// Remove the door message.
    DismissMessage,
}

#[derive(Debug, Clone)]
struct Scheduled {
    token: TimerToken,
    remaining: f32,
    action: DeferredAction,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Scheduler {
    next_token: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay` seconds of simulation time.
    pub fn schedule(&mut self, delay: f32, action: DeferredAction) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending.push(Scheduled {
            token,
            remaining: delay,
            action,
        });
        token
    }

    /// Cancel a pending callback. Returns false if it already fired or was canceled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.token != token);
        self.pending.len() != before
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|s| s.token == token)
    }

    /// Seconds left before `token` fires.
    pub fn remaining(&self, token: TimerToken) -> Option<f32> {
        self.pending
            .iter()
            .find(|s| s.token == token)
            .map(|s| s.remaining)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Count down by `dt` seconds and return the callbacks that came due, in
    /// the order they were scheduled.
    pub fn advance(&mut self, dt: f32) -> Vec<(TimerToken, DeferredAction)> {
        let mut due = Vec::new();
        self.pending.retain_mut(|s| {
            s.remaining -= dt;
            if s.remaining <= 0.0 {
                due.push((s.token, s.action));
                false
            } else {
                true
            }
        });
        due
    }

    /// Drop every pending callback. Tokens keep increasing so stale ones never match.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut s = Scheduler::new();
        let t = s.schedule(0.5, DeferredAction::DismissMessage);
        assert!(s.advance(0.25).is_empty());
        assert_eq!(s.advance(0.25), vec![(t, DeferredAction::DismissMessage)]);
        assert!(s.advance(1.0).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn canceled_callback_never_fires() {
        let mut s = Scheduler::new();
        let t = s.schedule(0.5, DeferredAction::DismissMessage);
        assert!(s.cancel(t));
        assert!(!s.cancel(t));
        assert!(s.advance(1.0).is_empty());
    }

    #[test]
    fn tokens_are_unique_across_clear() {
        let mut s = Scheduler::new();
        let a = s.schedule(1.0, DeferredAction::SpawnActor);
        s.clear();
        let b = s.schedule(1.0, DeferredAction::SpawnActor);
        assert_ne!(a, b);
        assert!(!s.is_pending(a));
        assert!(s.is_pending(b));
    }

    #[test]
    fn due_callbacks_come_back_in_schedule_order() {
        let mut s = Scheduler::new();
        let a = s.schedule(0.125, DeferredAction::SpawnActor);
        let b = s.schedule(0.0625, DeferredAction::DismissMessage);
        let due = s.advance(0.25);
        assert_eq!(
            due,
            vec![
                (a, DeferredAction::SpawnActor),
                (b, DeferredAction::DismissMessage)
            ]
        );
    }

    #[test]
    fn remaining_counts_down() {
        let mut s = Scheduler::new();
        let t = s.schedule(2.0, DeferredAction::DismissMessage);
        s.advance(0.5);
        assert_eq!(s.remaining(t), Some(1.5));
    }
}
