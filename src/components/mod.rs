//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actor`] – facing and moving state of the player-controlled actor
//! - [`animation`] – walk-cycle frame keys and per-entity animation state
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap and push-out
//! - [`dynamictext`] – overlay text (instructions, door message)
//! - [`inputcontrolled`] – horizontal speed applied from the move intent
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – velocity and gravity
//! - [`scenemember`] – marker for entities despawned on scene restart
//! - [`screenposition`] – screen-space position for overlay elements
//! - [`solid`] – static collision surfaces (ground, boundary wall)
//! - [`sprite`] – texture key swapped by the animation system
//! - [`zone`] – interactive door zones and their highlight flag

pub mod actor;
pub mod animation;
pub mod boxcollider;
pub mod dynamictext;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod scenemember;
pub mod screenposition;
pub mod solid;
pub mod sprite;
pub mod zone;
