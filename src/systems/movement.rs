//! Kinematic integration and static collision.
//!
//! Each non-solid body with a [`RigidBody`] and a [`BoxCollider`] gets its
//! gravity added to its velocity, then moves one axis at a time. After
//! each axis step it is pushed back out of every [`Solid`] it sank into and
//! its velocity on that axis is zeroed. Finally the body is clamped inside
//! [`WorldBounds`].
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::solid::Solid;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

/// Overlap on the other axis below this is treated as resting contact.
const SKIN: f32 = 0.01;
/// Longest physics step per frame, in seconds. At the default speed one step
/// stays shorter than the stretch where a door counts as passed.
pub const MAX_STEP: f32 = 0.25;

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

pub fn movement(
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider), Without<Solid>>,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
    bounds: Res<WorldBounds>,
    time: Res<WorldTime>,
) {
    let dt = time.delta.min(MAX_STEP);
    let statics: Vec<(Vec2, BoxCollider)> = solids.iter().map(|(p, c)| (p.pos, *c)).collect();

    for (mut position, mut rigidbody, collider) in bodies.iter_mut() {
        let gravity = rigidbody.gravity;
        rigidbody.velocity += gravity * dt;

        let mut pos = position.pos;
        let mut vel = rigidbody.velocity;

        pos.x += vel.x * dt;
        resolve(&mut pos, &mut vel, collider, &statics, Axis::X);
        pos.y += vel.y * dt;
        resolve(&mut pos, &mut vel, collider, &statics, Axis::Y);

        let (min, max) = collider.aabb(pos);
        let correction = bounds.clamp_offset(min, max);
        if correction.x != 0.0 {
            vel.x = 0.0;
        }
        if correction.y != 0.0 {
            vel.y = 0.0;
        }
        pos += correction;

        position.pos = pos;
        rigidbody.velocity = vel;
    }
}

fn resolve(
    pos: &mut Vec2,
    vel: &mut Vec2,
    collider: &BoxCollider,
    statics: &[(Vec2, BoxCollider)],
    axis: Axis,
) {
    for (solid_pos, solid) in statics {
        let Some(depth) = collider.overlap_depth(*pos, solid, *solid_pos) else {
            continue;
        };
        let (min_a, max_a) = collider.aabb(*pos);
        let (min_b, max_b) = solid.aabb(*solid_pos);
        match axis {
            Axis::X => {
                if depth.y <= SKIN {
                    continue;
                }
                pos.x += if push_sign(vel.x, pos.x - solid_pos.x) < 0.0 {
                    min_b.x - max_a.x
                } else {
                    max_b.x - min_a.x
                };
                vel.x = 0.0;
            }
            Axis::Y => {
                if depth.x <= SKIN {
                    continue;
                }
                pos.y += if push_sign(vel.y, pos.y - solid_pos.y) < 0.0 {
                    min_b.y - max_a.y
                } else {
                    max_b.y - min_a.y
                };
                vel.y = 0.0;
            }
        }
    }
}

/// Direction to push a body out: against its motion, or away from the
/// solid's center when it was not moving on this axis.
fn push_sign(velocity: f32, from_center: f32) -> f32 {
    if velocity > 0.0 {
        -1.0
    } else if velocity < 0.0 {
        1.0
    } else if from_center < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_against_motion() {
        assert_eq!(push_sign(10.0, 5.0), -1.0);
        assert_eq!(push_sign(-10.0, -5.0), 1.0);
    }

    #[test]
    fn push_away_from_center_when_still() {
        assert_eq!(push_sign(0.0, -3.0), -1.0);
        assert_eq!(push_sign(0.0, 3.0), 1.0);
    }

    #[test]
    fn landing_snaps_to_surface() {
        let actor = BoxCollider::centered(52.0, 64.0);
        let ground = BoxCollider::centered(1600.0, 50.0);
        let statics = [(Vec2::new(800.0, 375.0), ground)];
        // bottom at 354, four pixels into the ground top at 350
        let mut pos = Vec2::new(100.0, 322.0);
        let mut vel = Vec2::new(200.0, 40.0);
        resolve(&mut pos, &mut vel, &actor, &statics, Axis::X);
        assert_eq!(pos.x, 100.0);
        resolve(&mut pos, &mut vel, &actor, &statics, Axis::Y);
        assert_eq!(pos.y, 318.0);
        assert_eq!(vel, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn fast_body_is_pushed_back_to_the_face() {
        let actor = BoxCollider::centered(52.0, 64.0);
        let wall = BoxCollider::centered(20.0, 400.0);
        let statics = [(Vec2::new(1850.0, 200.0), wall)];
        // spans the whole wall: 1813..1865
        let mut pos = Vec2::new(1839.0, 318.0);
        let mut vel = Vec2::new(200.0, 0.0);
        resolve(&mut pos, &mut vel, &actor, &statics, Axis::X);
        assert_eq!(pos.x, 1814.0);
    }

    #[test]
    fn wall_blocks_horizontal_motion() {
        let actor = BoxCollider::centered(52.0, 64.0);
        let wall = BoxCollider::centered(20.0, 400.0);
        let statics = [(Vec2::new(1850.0, 200.0), wall)];
        // right edge at 1846, six pixels into the wall face at 1840
        let mut pos = Vec2::new(1820.0, 318.0);
        let mut vel = Vec2::new(200.0, 0.0);
        resolve(&mut pos, &mut vel, &actor, &statics, Axis::X);
        assert_eq!(pos.x, 1814.0);
        assert_eq!(vel.x, 0.0);
    }
}
