use crate::resources::gamestate::GameState;
use bevy_ecs::prelude::*;

/// Run condition for per-tick actor systems.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    state.is_playing()
}
