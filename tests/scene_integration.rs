//! Whole-scene integration tests driving `MissionScene` the way a frontend does.

use bevy_ecs::prelude::*;

use missionwalk::components::actor::Facing;
use missionwalk::components::animation::FrameKey;
use missionwalk::components::dynamictext::DynamicText;
use missionwalk::components::zone::ZoneId;
use missionwalk::game::MissionScene;
use missionwalk::resources::gameconfig::GameConfig;
use missionwalk::resources::input::InputAction;
use missionwalk::resources::intent::MoveIntent;
use missionwalk::resources::level::LevelLayout;
use missionwalk::resources::messageoverlay::MessageOverlay;
use missionwalk::resources::scheduler::Scheduler;
use missionwalk::resources::touch::{TouchEvent, TouchState};
use missionwalk::resources::zonetracker::ZoneState;

// Binary-exact frame step: 25px per tick at 200 px/s.
const DT: f32 = 0.125;

fn new_scene() -> MissionScene {
    MissionScene::new(GameConfig::new(), LevelLayout::default())
}

const FIVE_DOORS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/levels/five_doors.json");

fn five_door_scene() -> MissionScene {
    let layout = LevelLayout::load_from_file(FIVE_DOORS).unwrap();
    assert_eq!(layout.door_spacing, 300.0);
    MissionScene::new(GameConfig::new(), layout)
}

/// Tick until the asset-ready gate has fired, without any input.
fn make_ready(scene: &mut MissionScene) {
    scene.tick(DT, 0);
    assert!(scene.is_ready());
}

fn hold(scene: &mut MissionScene, action: InputAction, down: bool) {
    scene.input_mut().set(action, down);
}

fn press_interact_and_tick(scene: &mut MissionScene, dt: f32) {
    hold(scene, InputAction::Interact, true);
    scene.tick(dt, 0);
    hold(scene, InputAction::Interact, false);
}

fn text_count(scene: &mut MissionScene) -> usize {
    let world = scene.world_mut();
    let mut q = world.query::<&DynamicText>();
    q.iter(world).count()
}

fn check_zone_invariant(scene: &mut MissionScene) {
    let lit: Vec<ZoneId> = scene
        .zone_highlights()
        .into_iter()
        .filter(|(_, h)| *h)
        .map(|(id, _)| id)
        .collect();
    match scene.zone_state() {
        ZoneState::None => assert!(lit.is_empty()),
        ZoneState::Near(id) => assert_eq!(lit, vec![id]),
    }
}

#[test]
fn nothing_moves_before_assets_are_ready() {
    let mut scene = new_scene();
    assert!(!scene.is_ready());
    assert!(scene.actor().is_none());

    hold(&mut scene, InputAction::Right, true);
    scene.tick(0.0625, 0);
    assert!(!scene.is_ready());
    assert!(scene.actor().is_none());
    assert_eq!(scene.zone_state(), ZoneState::None);
}

#[test]
fn actor_spawns_at_the_spawn_point() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    let actor = scene.actor().unwrap();
    assert_eq!(actor.x, 100.0);
    assert_eq!(actor.facing, Facing::Right);
    assert!(!actor.moving);
    assert_eq!(scene.frame_key(), Some(FrameKey::StandRight));
}

#[test]
fn walking_right_for_half_a_second_covers_100px() {
    let mut scene = new_scene();
    make_ready(&mut scene);

    hold(&mut scene, InputAction::Right, true);
    for _ in 0..4 {
        scene.tick(DT, 0);
    }
    let actor = scene.actor().unwrap();
    assert!((actor.x - 200.0).abs() < 1e-3);
    assert_eq!(actor.velocity_x, 200.0);
    assert!(actor.moving);
}

#[test]
fn actor_lands_on_the_ground() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    for _ in 0..16 {
        scene.tick(DT, 0);
    }
    // ground top at 350, actor 64px tall and centered
    assert_eq!(scene.actor().unwrap().y, 318.0);
}

#[test]
fn left_wins_when_both_directions_are_held() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Left, true);
    hold(&mut scene, InputAction::Right, true);
    scene.tick(DT, 0);
    let actor = scene.actor().unwrap();
    assert!(actor.velocity_x < 0.0);
    assert_eq!(actor.facing, Facing::Left);
}

#[test]
fn releasing_keeps_facing_and_stands() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Left, true);
    scene.tick(DT, 0);
    hold(&mut scene, InputAction::Left, false);
    scene.tick(DT, 150);
    let actor = scene.actor().unwrap();
    assert_eq!(actor.velocity_x, 0.0);
    assert_eq!(actor.facing, Facing::Left);
    assert!(!actor.moving);
    assert_eq!(scene.frame_key(), Some(FrameKey::StandLeft));
}

#[test]
fn walk_cycle_follows_the_wall_clock() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);

    scene.tick(DT, 0);
    assert_eq!(scene.frame_key(), Some(FrameKey::WalkRight));
    scene.tick(DT, 150);
    assert_eq!(scene.frame_key(), Some(FrameKey::StandRight));
    scene.tick(DT, 300);
    assert_eq!(scene.frame_key(), Some(FrameKey::WalkRight));
}

#[test]
fn reaching_the_first_door_highlights_it() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);
    for _ in 0..4 {
        scene.tick(DT, 0);
        check_zone_invariant(&mut scene);
    }
    assert_eq!(scene.zone_state(), ZoneState::Near(ZoneId(1)));
    assert_eq!(
        scene.zone_highlights(),
        vec![(ZoneId(1), true), (ZoneId(2), false), (ZoneId(3), false)]
    );
}

#[test]
fn interact_without_a_door_is_ignored() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    press_interact_and_tick(&mut scene, DT);
    assert!(scene.message_text().is_none());
    assert_eq!(text_count(&mut scene), 1);
}

#[test]
fn second_interact_replaces_the_message_and_its_timer() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);
    for _ in 0..4 {
        scene.tick(DT, 0);
    }
    hold(&mut scene, InputAction::Right, false);
    assert_eq!(scene.zone_state(), ZoneState::Near(ZoneId(1)));

    press_interact_and_tick(&mut scene, DT);
    assert_eq!(scene.message_text().as_deref(), Some("You tapped the door!"));
    let first = scene
        .world()
        .resource::<MessageOverlay>()
        .current()
        .unwrap()
        .dismiss;
    assert_eq!(scene.world().resource::<Scheduler>().remaining(first), Some(2.0));

    scene.tick(0.25, 0);
    press_interact_and_tick(&mut scene, 0.25);

    let overlay = scene.world().resource::<MessageOverlay>();
    assert_eq!(overlay.shown_count, 2);
    let second = overlay.current().unwrap().dismiss;
    assert_ne!(first, second);
    let scheduler = scene.world().resource::<Scheduler>();
    assert!(!scheduler.is_pending(first));
    assert_eq!(scheduler.remaining(second), Some(2.0));
    assert_eq!(scheduler.len(), 1);
    // instructions line plus exactly one message
    assert_eq!(text_count(&mut scene), 2);

    for _ in 0..3 {
        scene.tick(0.5, 0);
    }
    assert!(scene.message_text().is_some());
    scene.tick(0.5, 0);
    assert!(scene.message_text().is_none());
    assert_eq!(text_count(&mut scene), 1);
}

#[test]
fn middle_tap_at_a_door_interacts_without_moving() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);
    for _ in 0..4 {
        scene.tick(DT, 0);
    }
    hold(&mut scene, InputAction::Right, false);

    scene.touch(TouchEvent::Start {
        x: 400.0,
        screen_width: 800.0,
    });
    scene.tick(DT, 0);
    assert_eq!(scene.message_text().as_deref(), Some("You tapped the door!"));
    let touch = *scene.world().resource::<TouchState>();
    assert!(!touch.left && !touch.right);
    assert_eq!(scene.actor().unwrap().velocity_x, 0.0);
}

#[test]
fn touch_edges_walk_and_cancel_stops() {
    let mut scene = new_scene();
    make_ready(&mut scene);

    scene.touch(TouchEvent::Start {
        x: 700.0,
        screen_width: 800.0,
    });
    scene.tick(DT, 0);
    assert_eq!(
        *scene.world().resource::<MoveIntent>(),
        MoveIntent {
            left: false,
            right: true,
            interact: false
        }
    );
    assert_eq!(scene.actor().unwrap().x, 125.0);

    scene.touch(TouchEvent::Cancel);
    scene.tick(DT, 0);
    let touch = *scene.world().resource::<TouchState>();
    assert!(!touch.left && !touch.right);
    assert_eq!(scene.actor().unwrap().velocity_x, 0.0);
}

#[test]
fn passing_every_door_opens_the_world_once() {
    let mut scene = five_door_scene();
    make_ready(&mut scene);
    assert_eq!(scene.milestone().total, 5);

    let mut bounds = scene.world_bounds();
    let mut highest = 0;
    let mut max_x_changes = 0;

    hold(&mut scene, InputAction::Right, true);
    for _ in 0..100 {
        scene.tick(DT, 0);
        check_zone_invariant(&mut scene);

        let now = scene.world_bounds();
        assert!(now.contains(&bounds));
        if now.max_x != bounds.max_x {
            max_x_changes += 1;
        }
        bounds = now;

        let passed = scene.milestone().highest_passed;
        assert!(passed >= highest);
        highest = passed;
    }

    let milestone = scene.milestone();
    assert_eq!(milestone.highest_passed, 5);
    assert!(milestone.boundary_built);
    assert_eq!(scene.boundary_wall_count(), 1);
    assert_eq!(max_x_changes, 1);
    assert_eq!(bounds.max_x, 1860.0);
    // stopped by the wall face at 1840
    assert_eq!(scene.actor().unwrap().x, 1814.0);

    // walk back over the last doors and return
    hold(&mut scene, InputAction::Right, false);
    hold(&mut scene, InputAction::Left, true);
    for _ in 0..20 {
        scene.tick(DT, 0);
    }
    hold(&mut scene, InputAction::Left, false);
    hold(&mut scene, InputAction::Right, true);
    for _ in 0..20 {
        scene.tick(DT, 0);
    }
    assert_eq!(scene.milestone(), milestone);
    assert_eq!(scene.boundary_wall_count(), 1);
    assert_eq!(scene.world_bounds(), bounds);
}

#[test]
fn long_frames_still_pass_every_door() {
    let mut scene = five_door_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);
    // one-second frames would carry the friar 200 px, over a door's pass window
    for _ in 0..50 {
        scene.tick(1.0, 0);
    }
    let milestone = scene.milestone();
    assert_eq!(milestone.highest_passed, 5);
    assert!(milestone.boundary_built);
    assert_eq!(scene.boundary_wall_count(), 1);
    assert_eq!(scene.actor().unwrap().x, 1814.0);
}

#[test]
fn restart_rebuilds_the_scene() {
    let mut scene = five_door_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);
    for _ in 0..70 {
        scene.tick(DT, 0);
    }
    hold(&mut scene, InputAction::Right, false);
    assert_eq!(scene.boundary_wall_count(), 1);

    hold(&mut scene, InputAction::Restart, true);
    scene.tick(0.0625, 0);
    hold(&mut scene, InputAction::Restart, false);

    assert!(!scene.is_ready());
    assert!(scene.actor().is_none());
    assert_eq!(scene.boundary_wall_count(), 0);
    assert_eq!(scene.milestone().highest_passed, 0);
    assert_eq!(scene.world_bounds().max_x, 1600.0);
    assert_eq!(scene.zone_highlights().len(), 5);
    assert_eq!(text_count(&mut scene), 1);

    scene.tick(DT, 0);
    assert!(scene.is_ready());
    assert_eq!(scene.actor().unwrap().x, 100.0);
}

#[test]
fn debug_key_toggles_debug_mode() {
    let mut scene = new_scene();
    assert!(!scene.debug_enabled());
    hold(&mut scene, InputAction::ToggleDebug, true);
    scene.tick(DT, 0);
    assert!(scene.debug_enabled());
    // still held: no new edge
    scene.tick(DT, 0);
    assert!(scene.debug_enabled());
    hold(&mut scene, InputAction::ToggleDebug, false);
    scene.tick(DT, 0);
    hold(&mut scene, InputAction::ToggleDebug, true);
    scene.tick(DT, 0);
    assert!(!scene.debug_enabled());
}

#[test]
fn camera_stays_inside_the_world() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    scene.tick(DT, 0);
    let cam = scene.camera();
    assert_eq!(cam.target.x, 400.0);
    assert_eq!(cam.target.y, 200.0);

    hold(&mut scene, InputAction::Right, true);
    for _ in 0..80 {
        scene.tick(DT, 0);
    }
    // last door passed: bounds end at the wall's far face, 1860
    assert_eq!(scene.world_bounds().max_x, 1860.0);
    assert_eq!(scene.camera().target.x, 1460.0);
}

#[test]
fn background_scrolls_while_walking() {
    let mut scene = new_scene();
    make_ready(&mut scene);
    hold(&mut scene, InputAction::Right, true);
    scene.tick(DT, 0);
    scene.tick(DT, 0);
    assert_eq!(scene.background().tile_position_x, 4.0);

    hold(&mut scene, InputAction::Right, false);
    hold(&mut scene, InputAction::Left, true);
    scene.tick(DT, 0);
    assert_eq!(scene.background().tile_position_x, 2.0);

    hold(&mut scene, InputAction::Left, false);
    scene.tick(DT, 0);
    assert_eq!(scene.background().tile_position_x, 2.0);
}
