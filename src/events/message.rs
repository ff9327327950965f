//! Door message lifecycle.
//!
//! [`ShowMessageEvent`] replaces whatever message is on screen: the old
//! dismissal timer is canceled and the old text entity despawned before the
//! new one is spawned with a fresh timer. The timer firing is handled in
//! [`crate::events::timer::timer_observer`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::dynamictext::DynamicText;
use crate::components::scenemember::SceneMember;
use crate::components::screenposition::ScreenPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::messageoverlay::{MessageOverlay, ShownMessage};
use crate::resources::scheduler::{DeferredAction, Scheduler};
use crate::resources::screensize::ScreenSize;

pub const MESSAGE_FONT_SIZE: f32 = 24.0;
/// The message sits this far above the screen center.
pub const MESSAGE_RAISE: f32 = 50.0;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ShowMessageEvent {
    pub text: String,
}

pub fn show_message_observer(
    trigger: On<ShowMessageEvent>,
    mut overlay: ResMut<MessageOverlay>,
    mut scheduler: ResMut<Scheduler>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
) {
    let text = trigger.event().text.clone();

    let entity = commands
        .spawn((
            DynamicText::new(text.clone(), MESSAGE_FONT_SIZE).centered(),
            ScreenPosition::new(
                screen.w as f32 * 0.5,
                screen.h as f32 * 0.5 - MESSAGE_RAISE,
            ),
            SceneMember,
        ))
        .id();
    let dismiss = scheduler.schedule(config.message_secs(), DeferredAction::DismissMessage);

    if let Some(previous) = overlay.replace(ShownMessage {
        entity,
        text: text.clone(),
        dismiss,
    }) {
        scheduler.cancel(previous.dismiss);
        commands.entity(previous.entity).try_despawn();
        debug!("replaced pending message {:?}", previous.dismiss);
    }
    info!("showing message {:?}", text);
}
