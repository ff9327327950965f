//! High-level scene state.
//!
//! The scene starts in [`GameStates::Loading`]; the asset-ready gate moves it
//! to [`GameStates::Playing`]. Per-tick actor systems only run while playing
//! (see [`crate::systems::gamestate::state_is_playing`]).

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Level built, waiting for the actor's assets.
    Loading,
    Playing,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }

    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }
}
