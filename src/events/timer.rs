//! Deferred callback events.
//!
//! [`crate::systems::scheduler::update_scheduler`] triggers a [`TimerEvent`]
//! for every callback that came due. [`timer_observer`] performs the action:
//! the asset-ready gate spawns the actor and switches to
//! [`GameStates::Playing`]; a dismissal removes the door message if its
//! token is still the current one.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::actor::Actor;
use crate::game::spawn_actor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::level::LevelLayout;
use crate::resources::messageoverlay::MessageOverlay;
use crate::resources::scheduler::{DeferredAction, TimerToken};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub token: TimerToken,
    pub action: DeferredAction,
}

pub fn timer_observer(
    trigger: On<TimerEvent>,
    mut state: ResMut<GameState>,
    mut overlay: ResMut<MessageOverlay>,
    config: Res<GameConfig>,
    layout: Res<LevelLayout>,
    actors: Query<(), With<Actor>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    match event.action {
        DeferredAction::SpawnActor => {
            if !actors.is_empty() {
                warn!("asset-ready gate fired with an actor already present");
                return;
            }
            spawn_actor(&mut commands, &config, &layout);
            state.set(GameStates::Playing);
            info!("actor ready at {:?}", layout.spawn_point());
        }
        DeferredAction::DismissMessage => match overlay.dismiss(event.token) {
            Some(message) => {
                commands.entity(message.entity).try_despawn();
                debug!("dismissed message {:?}", message.text);
            }
            None => debug!("stale dismissal {:?} ignored", event.token),
        },
    }
}
