//! ECS resources made available to systems.
//!
//! Overview
//! - `background` – tiled background scroll offset
//! - `camera2d` – camera target following the actor
//! - `debugmode` – presence toggles collider outlines in the frontend
//! - `gameconfig` – INI-backed tunables
//! - `gamestate` – loading/playing state behind the asset-ready gate
//! - `input` – per-frame keyboard state with press/release edges
//! - `intent` – merged per-tick move intent
//! - `level` – level geometry, optionally from JSON
//! - `messageoverlay` – the single transient door message
//! - `milestone` – highest door passed and the one-time boundary expansion
//! - `scheduler` – cancelable one-shot deferred callbacks
//! - `screensize` – current viewport dimensions in pixels
//! - `touch` – touch-edge state and raw touch messages
//! - `worldbounds` – grow-only traversable rectangle
//! - `worldtime` – simulation time, delta and wall clock
//! - `zonetracker` – the current zone, if any
pub mod background;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod intent;
pub mod level;
pub mod messageoverlay;
pub mod milestone;
pub mod scheduler;
pub mod screensize;
pub mod touch;
pub mod worldbounds;
pub mod worldtime;
pub mod zonetracker;
