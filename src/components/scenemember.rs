//! Scene-scoped entity marker component.
//!
//! Everything spawned while building or playing a scene carries
//! [`SceneMember`]; restarting the scene despawns exactly those entities.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneMember;
