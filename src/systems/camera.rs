//! Camera follow.
//!
//! Keeps [`Camera2DRes::target`] on the actor while never showing anything
//! outside [`WorldBounds`]. A world narrower than the view is centered.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldbounds::WorldBounds;

fn clamp_axis(target: f32, min: f32, max: f32, half_view: f32) -> f32 {
    if max - min <= half_view * 2.0 {
        (min + max) * 0.5
    } else {
        target.clamp(min + half_view, max - half_view)
    }
}

pub fn follow_target(target: Vec2, bounds: &WorldBounds, screen: Vec2, zoom: f32) -> Vec2 {
    let half = screen / (2.0 * zoom);
    Vec2::new(
        clamp_axis(target.x, bounds.min_x, bounds.max_x, half.x),
        clamp_axis(target.y, bounds.min_y, bounds.max_y, half.y),
    )
}

pub fn camera_follow(
    actor: Query<&MapPosition, With<Actor>>,
    mut camera: ResMut<Camera2DRes>,
    bounds: Res<WorldBounds>,
    screen: Res<ScreenSize>,
) {
    let Ok(position) = actor.single() else {
        return;
    };
    let screen = Vec2::new(screen.w as f32, screen.h as f32);
    camera.target = follow_target(position.pos, &bounds, screen, camera.zoom);
}
