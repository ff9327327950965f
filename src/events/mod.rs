//! Event types and observers used by the scene.
//!
//! Submodules:
//! - [`input`] – interact trigger from touch or keyboard
//! - [`message`] – show/replace the transient door message
//! - [`milestone`] – door-passed transitions and the one-time world expansion
//! - [`switchdebug`] – toggle debug overlays on/off
//! - [`timer`] – deferred callbacks (asset-ready gate, message dismissal)
pub mod input;
pub mod message;
pub mod milestone;
pub mod switchdebug;
pub mod timer;
