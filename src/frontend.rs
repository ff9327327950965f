//! Raylib window frontend.
//!
//! Acts as the substrate for [`MissionScene`]: polls the keyboard and the
//! mouse (as a single touch point), ticks the scene, and draws it with
//! flat-colored rectangles. Sprite art is out of scope; frames are shown by
//! tint so the walk cycle stays visible.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::Actor;
use crate::components::animation::{FrameKey, WalkAnimation};
use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::solid::{BoundaryWall, Ground};
use crate::components::zone::InteractionZone;
use crate::game::MissionScene;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputAction;
use crate::resources::level::LevelLayout;
use crate::resources::touch::TouchEvent;

const SKY: Color = Color::new(135, 190, 235, 255);
const WALL: Color = Color::new(214, 188, 150, 255);
const GROUND: Color = Color::new(120, 90, 60, 255);
const DOOR: Color = Color::new(110, 60, 30, 255);
const GLOW: Color = Color::new(255, 220, 80, 255);
const HABIT: Color = Color::new(90, 70, 50, 255);
const HABIT_STEP: Color = Color::new(70, 55, 40, 255);
const BACKGROUND_TILE: i32 = 64;

fn to_vector2(v: glam::Vec2) -> Vector2 {
    Vector2 { x: v.x, y: v.y }
}

fn rect(pos: glam::Vec2, collider: &BoxCollider) -> Rectangle {
    let (min, max) = collider.aabb(pos);
    Rectangle {
        x: min.x,
        y: min.y,
        width: max.x - min.x,
        height: max.y - min.y,
    }
}

fn raylib_camera(cam: &Camera2DRes, w: i32, h: i32) -> Camera2D {
    Camera2D {
        offset: Vector2 {
            x: w as f32 * 0.5,
            y: h as f32 * 0.5,
        },
        target: to_vector2(cam.target),
        rotation: 0.0,
        zoom: cam.zoom,
    }
}

fn poll_input(rl: &RaylibHandle, scene: &mut MissionScene) {
    {
        let mut input = scene.input_mut();
        input.set(
            InputAction::Left,
            rl.is_key_down(KeyboardKey::KEY_LEFT) || rl.is_key_down(KeyboardKey::KEY_A),
        );
        input.set(
            InputAction::Right,
            rl.is_key_down(KeyboardKey::KEY_RIGHT) || rl.is_key_down(KeyboardKey::KEY_D),
        );
        input.set(InputAction::Interact, rl.is_key_down(KeyboardKey::KEY_SPACE));
        input.set(InputAction::Restart, rl.is_key_down(KeyboardKey::KEY_R));
        input.set(InputAction::ToggleDebug, rl.is_key_down(KeyboardKey::KEY_F11));
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        scene.touch(TouchEvent::Start {
            x: rl.get_mouse_x() as f32,
            screen_width: rl.get_screen_width() as f32,
        });
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        scene.touch(TouchEvent::End);
    }
}

fn draw_world(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>, debug: bool) {
    let bounds = *world.resource::<crate::resources::worldbounds::WorldBounds>();
    d2.draw_rectangle_rec(
        Rectangle {
            x: bounds.min_x,
            y: bounds.min_y,
            width: bounds.width(),
            height: bounds.height(),
        },
        WALL,
    );

    let mut ground = world.query_filtered::<(&MapPosition, &BoxCollider), With<Ground>>();
    for (pos, collider) in ground.iter(world) {
        d2.draw_rectangle_rec(rect(pos.pos, collider), GROUND);
    }

    let mut walls = world.query_filtered::<(&MapPosition, &BoxCollider), With<BoundaryWall>>();
    for (pos, collider) in walls.iter(world) {
        d2.draw_rectangle_rec(rect(pos.pos, collider), Color::DARKGRAY);
    }

    let mut zones = world.query::<(&InteractionZone, &MapPosition, &BoxCollider)>();
    for (zone, pos, collider) in zones.iter(world) {
        let r = rect(pos.pos, collider);
        d2.draw_rectangle_rec(r, DOOR);
        if zone.highlighted {
            d2.draw_rectangle_lines_ex(r, 3.0, GLOW);
        }
    }

    let mut actor = world.query::<(&Actor, &WalkAnimation, &MapPosition, &BoxCollider)>();
    for (_, anim, pos, collider) in actor.iter(world) {
        let color = match anim.frame {
            FrameKey::WalkLeft | FrameKey::WalkRight => HABIT_STEP,
            FrameKey::StandLeft | FrameKey::StandRight => HABIT,
        };
        let r = rect(pos.pos, collider);
        d2.draw_rectangle_rec(r, color);
        // hood on the facing side
        let hood_x = match anim.frame {
            FrameKey::StandLeft | FrameKey::WalkLeft => r.x,
            FrameKey::StandRight | FrameKey::WalkRight => r.x + r.width * 0.5,
        };
        d2.draw_rectangle_rec(
            Rectangle {
                x: hood_x,
                y: r.y,
                width: r.width * 0.5,
                height: r.height * 0.25,
            },
            Color::BLACK,
        );
    }

    if debug {
        let mut colliders = world.query::<(&MapPosition, &BoxCollider)>();
        for (pos, collider) in colliders.iter(world) {
            d2.draw_rectangle_lines_ex(rect(pos.pos, collider), 1.0, Color::RED);
        }
    }
}

fn draw_overlay(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut texts = world.query::<(&DynamicText, &ScreenPosition)>();
    for (text, pos) in texts.iter(world) {
        let size = text.font_size as i32;
        let mut x = pos.pos.x as i32;
        let mut y = pos.pos.y as i32;
        if text.centered {
            x -= measure_text(&text.content, size) / 2;
            y -= size / 2;
        }
        d.draw_text(&text.content, x, y, size, Color::BLACK);
    }
}

/// Open the window and run until it is closed.
pub fn run(config: GameConfig, layout: LevelLayout) {
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .resizable()
        .title("Mission Walk")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let mut scene = MissionScene::new(config, layout);

    while !rl.window_should_close() {
        let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
        scene.set_screen_size(w, h);
        poll_input(&rl, &mut scene);

        let dt = rl.get_frame_time();
        let wall_ms = (rl.get_time() * 1000.0) as u64;
        scene.tick(dt, wall_ms);

        let cam = raylib_camera(&scene.camera(), w, h);
        let debug = scene.debug_enabled();
        let background = scene.background();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(SKY);
        let offset = (background.tile_position_x as i32).rem_euclid(BACKGROUND_TILE);
        for i in 0..(w / BACKGROUND_TILE + 2) {
            let x = i * BACKGROUND_TILE - offset;
            d.draw_line(x, 0, x, h, Color::SKYBLUE);
        }
        {
            let mut d2 = d.begin_mode2D(cam);
            draw_world(scene.world_mut(), &mut d2, debug);
        }
        draw_overlay(scene.world_mut(), &mut d);
        if debug {
            let text = format!("zone: {:?}", scene.zone_state());
            d.draw_text(&text, 10, h - 20, 10, Color::BLACK);
        }
    }
}
