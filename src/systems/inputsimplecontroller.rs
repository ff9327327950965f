//! Intent-to-velocity controller.
//!
//! Reads the merged [`MoveIntent`] and writes horizontal velocity, facing
//! and the moving flag on the entity carrying [`InputControlled`]. Vertical
//! velocity is left to the movement system (gravity, ground contact).
use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, Facing};
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::intent::MoveIntent;

/// Horizontal velocity and facing for `intent`. Left wins when both
/// directions are held; with neither, facing is kept.
pub fn steer(intent: &MoveIntent, speed: f32, facing: Facing) -> (f32, Facing) {
    if intent.left {
        (-speed, Facing::Left)
    } else if intent.right {
        (speed, Facing::Right)
    } else {
        (0.0, facing)
    }
}

pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut Actor, &mut RigidBody)>,
    intent: Res<MoveIntent>,
) {
    for (controlled, mut actor, mut rigidbody) in query.iter_mut() {
        let (vx, facing) = steer(&intent, controlled.speed, actor.facing);
        rigidbody.set_velocity_x(vx);
        actor.facing = facing;
        actor.moving = vx != 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(left: bool, right: bool) -> MoveIntent {
        MoveIntent {
            left,
            right,
            interact: false,
        }
    }

    #[test]
    fn left_and_right() {
        assert_eq!(steer(&intent(true, false), 200.0, Facing::Right), (-200.0, Facing::Left));
        assert_eq!(steer(&intent(false, true), 200.0, Facing::Left), (200.0, Facing::Right));
    }

    #[test]
    fn both_held_walks_left() {
        let (vx, facing) = steer(&intent(true, true), 200.0, Facing::Right);
        assert!(vx < 0.0);
        assert_eq!(facing, Facing::Left);
    }

    #[test]
    fn idle_keeps_facing() {
        assert_eq!(steer(&intent(false, false), 200.0, Facing::Left), (0.0, Facing::Left));
    }
}
