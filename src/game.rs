//! Scene setup and the per-frame driver.
//!
//! [`MissionScene`] owns the ECS [`World`] and the update [`Schedule`]. The
//! substrate (the raylib frontend or the headless runner) feeds it held keys
//! through [`MissionScene::input_mut`], raw touches through
//! [`MissionScene::touch`], and calls [`MissionScene::tick`] once per frame.
//! Everything it needs to draw is available through the read accessors.
//!
//! Scene lifecycle:
//! 1. [`setup_scene`] lays down the ground, the doors and the instructions
//!    line, resets the per-scene resources and schedules the asset-ready
//!    gate. The scene is [`GameStates::Loading`].
//! 2. When the gate fires, [`spawn_actor`] places the friar and the scene
//!    becomes [`GameStates::Playing`].
//! 3. [`MissionScene::restart`] despawns every [`SceneMember`] and goes back
//!    to step 1.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::actor::{Actor, Facing};
use crate::components::animation::{FrameKey, WalkAnimation};
use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scenemember::SceneMember;
use crate::components::screenposition::ScreenPosition;
use crate::components::solid::{BoundaryWall, Ground, Solid};
use crate::components::sprite::Sprite;
use crate::components::zone::{InteractionZone, ZoneId};
use crate::events::input::interact_observer;
use crate::events::message::show_message_observer;
use crate::events::milestone::milestone_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::timer::timer_observer;
use crate::resources::background::Background;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use crate::resources::intent::MoveIntent;
use crate::resources::level::LevelLayout;
use crate::resources::messageoverlay::MessageOverlay;
use crate::resources::milestone::Milestone;
use crate::resources::scheduler::{DeferredAction, Scheduler};
use crate::resources::screensize::ScreenSize;
use crate::resources::touch::{TouchEvent, TouchState};
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::resources::zonetracker::{ZoneIndex, ZoneState, ZoneTracker};
use crate::systems::animation::walk_animation;
use crate::systems::background::background_scroll;
use crate::systems::camera::camera_follow;
use crate::systems::gamestate::state_is_playing;
use crate::systems::input::{aggregate_input, toggle_debug_from_input, update_touch_messages};
use crate::systems::inputsimplecontroller::input_simple_controller;
use crate::systems::movement::movement;
use crate::systems::scheduler::update_scheduler;
use crate::systems::time::update_world_time;
use crate::systems::zonetracker::zone_tracker;

/// Texture prefix of the actor frames (`friar-stand-left`, ...).
pub const ACTOR_TEXTURE_PREFIX: &str = "friar";
/// Background scroll per walking tick, in texture pixels.
pub const BACKGROUND_STEP: f32 = 2.0;
pub const INSTRUCTIONS_FONT_SIZE: f32 = 16.0;
pub const INSTRUCTIONS_POSITION: Vec2 = Vec2::new(10.0, 10.0);

/// Read-only copy of the actor state handed to the substrate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSnapshot {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub facing: Facing,
    pub moving: bool,
}

pub struct MissionScene {
    world: World,
    update: Schedule,
}

impl MissionScene {
    pub fn new(config: GameConfig, layout: LevelLayout) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
        world.insert_resource(ScreenSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        });
        world.insert_resource(InputState::default());
        world.insert_resource(TouchState::new(config.edge_fraction));
        world.init_resource::<Messages<TouchEvent>>();
        world.insert_resource(MoveIntent::default());
        world.insert_resource(Scheduler::new());
        world.insert_resource(GameState::new());
        world.insert_resource(Camera2DRes::default());
        world.insert_resource(Background::new(BACKGROUND_STEP));
        world.insert_resource(config);
        world.insert_resource(layout);

        world.add_observer(interact_observer);
        world.add_observer(show_message_observer);
        world.add_observer(timer_observer);
        world.add_observer(milestone_observer);
        world.add_observer(switch_debug_observer);
        world.flush();

        let mut update = Schedule::default();
        update.add_systems(
            (
                update_scheduler,
                aggregate_input,
                toggle_debug_from_input,
                input_simple_controller.run_if(state_is_playing),
                movement.run_if(state_is_playing),
                zone_tracker.run_if(state_is_playing),
                walk_animation.run_if(state_is_playing),
                camera_follow.run_if(state_is_playing),
                background_scroll.run_if(state_is_playing),
                update_touch_messages,
            )
                .chain(),
        );

        setup_scene(&mut world);

        Self { world, update }
    }

    /// Advance one frame. `dt` is the frame delta in seconds, `wall_ms` the
    /// host's wall clock in milliseconds.
    pub fn tick(&mut self, dt: f32, wall_ms: u64) {
        if self.world.resource::<InputState>().restart.just_pressed {
            self.restart();
        }
        update_world_time(&mut self.world, dt, wall_ms);
        self.update.run(&mut self.world);
        self.world.resource_mut::<InputState>().end_frame();
        self.world.clear_trackers();
    }

    /// Tear the scene down and build it again from the current layout.
    pub fn restart(&mut self) {
        clean_scene(&mut self.world);
        self.world.resource_mut::<Scheduler>().clear();
        setup_scene(&mut self.world);
        info!("scene restarted");
    }

    pub fn input_mut(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }

    /// Queue a raw touch event for the next tick.
    pub fn touch(&mut self, event: TouchEvent) {
        self.world.resource_mut::<Messages<TouchEvent>>().write(event);
    }

    pub fn set_screen_size(&mut self, w: i32, h: i32) {
        *self.world.resource_mut::<ScreenSize>() = ScreenSize { w, h };
    }

    pub fn actor(&mut self) -> Option<ActorSnapshot> {
        let mut query = self.world.query::<(&Actor, &MapPosition, &RigidBody)>();
        query
            .iter(&self.world)
            .next()
            .map(|(actor, pos, body)| ActorSnapshot {
                x: pos.x(),
                y: pos.y(),
                velocity_x: body.velocity.x,
                facing: actor.facing,
                moving: actor.moving,
            })
    }

    pub fn frame_key(&mut self) -> Option<FrameKey> {
        let mut query = self.world.query::<&WalkAnimation>();
        query.iter(&self.world).next().map(|anim| anim.frame)
    }

    /// `(id, highlighted)` for every door, in id order.
    pub fn zone_highlights(&mut self) -> Vec<(ZoneId, bool)> {
        let mut query = self.world.query::<&InteractionZone>();
        let mut zones: Vec<(ZoneId, bool)> = query
            .iter(&self.world)
            .map(|z| (z.id, z.highlighted))
            .collect();
        zones.sort_by_key(|(id, _)| *id);
        zones
    }

    pub fn boundary_wall_count(&mut self) -> usize {
        let mut query = self.world.query_filtered::<(), With<BoundaryWall>>();
        query.iter(&self.world).count()
    }

    pub fn zone_state(&self) -> ZoneState {
        self.world.resource::<ZoneTracker>().state
    }

    pub fn milestone(&self) -> Milestone {
        *self.world.resource::<Milestone>()
    }

    pub fn world_bounds(&self) -> WorldBounds {
        *self.world.resource::<WorldBounds>()
    }

    pub fn camera(&self) -> Camera2DRes {
        *self.world.resource::<Camera2DRes>()
    }

    pub fn background(&self) -> Background {
        *self.world.resource::<Background>()
    }

    pub fn message_text(&self) -> Option<String> {
        self.world
            .resource::<MessageOverlay>()
            .text()
            .map(str::to_string)
    }

    pub fn is_ready(&self) -> bool {
        self.world.resource::<GameState>().is_playing()
    }

    pub fn debug_enabled(&self) -> bool {
        self.world.contains_resource::<DebugMode>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

/// Build the static level and reset every per-scene resource.
pub fn setup_scene(world: &mut World) {
    let layout = world.resource::<LevelLayout>().clone();
    let config = world.resource::<GameConfig>().clone();

    let (ground_center, ground_size) = layout.ground_slab(0.0, layout.world_width);
    world.spawn((
        Ground,
        Solid,
        MapPosition::new(ground_center.x, ground_center.y),
        BoxCollider::centered(ground_size.x, ground_size.y),
        SceneMember,
    ));

    let mut index = ZoneIndex::default();
    let doors = layout.door_centers();
    for (i, center) in doors.iter().enumerate() {
        let zone = InteractionZone::new(i as u32 + 1);
        let entity = world
            .spawn((
                zone,
                MapPosition::new(center.x, center.y),
                BoxCollider::centered(layout.zone_width, layout.zone_height),
                Sprite::new("door", layout.zone_width, layout.zone_height),
                SceneMember,
            ))
            .id();
        index.insert(zone.id, entity);
    }

    world.spawn((
        DynamicText::new(config.instructions.clone(), INSTRUCTIONS_FONT_SIZE),
        ScreenPosition::new(INSTRUCTIONS_POSITION.x, INSTRUCTIONS_POSITION.y),
        SceneMember,
    ));

    world.insert_resource(index);
    world.insert_resource(Milestone::new(doors.len() as u32));
    world.insert_resource(WorldBounds::new(
        0.0,
        0.0,
        layout.world_width,
        layout.world_height,
    ));
    world.insert_resource(ZoneTracker::default());
    world.insert_resource(MessageOverlay::default());
    world.insert_resource(MoveIntent::default());
    world.resource_mut::<TouchState>().clear();
    world.resource_mut::<Messages<TouchEvent>>().clear();
    *world.resource_mut::<Camera2DRes>() = Camera2DRes::default();
    world.resource_mut::<Background>().tile_position_x = 0.0;

    world
        .resource_mut::<Scheduler>()
        .schedule(config.ready_delay_secs(), DeferredAction::SpawnActor);
    world.resource_mut::<GameState>().set(GameStates::Loading);
    world.flush();

    info!(
        "scene built: {} doors, world {}x{}",
        doors.len(),
        layout.world_width,
        layout.world_height
    );
}

/// Despawn every entity that belongs to the scene. Observers survive.
pub fn clean_scene(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<SceneMember>>()
        .iter(world)
        .collect();
    for entity in entities {
        world.despawn(entity);
    }
}

/// Place the actor at the layout's spawn point, facing right.
pub fn spawn_actor(commands: &mut Commands, config: &GameConfig, layout: &LevelLayout) -> Entity {
    let spawn = layout.spawn_point();
    let (w, h) = config.actor_size();
    let idle = FrameKey::stand(Facing::Right);
    commands
        .spawn((
            Actor::new(Facing::Right),
            MapPosition::new(spawn.x, spawn.y),
            RigidBody::with_gravity(config.gravity),
            BoxCollider::centered(w, h),
            InputControlled::new(config.speed),
            WalkAnimation::new(ACTOR_TEXTURE_PREFIX, config.walk_period_ms, Facing::Right),
            Sprite::new(idle.texture_key(ACTOR_TEXTURE_PREFIX), w, h),
            SceneMember,
        ))
        .id()
}
