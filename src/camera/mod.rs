//! Camera rig: four slots, their motion models and the blend between them.
//!
//! [`CameraRig`] is the state machine; the other modules hold the pieces it
//! is built from.

/// Four-slot rig controller and its state.
pub mod controller;
/// Slot identity, poses and projection helpers.
pub mod core;
/// Per-mode motion models (orbit, look, zoom, seek).
pub mod motion;
/// Waypoint tour for the path-follower slot.
pub mod path;
/// Render-target enable/disable seam with the host.
pub mod targets;
/// Blend state between two slots.
pub mod transition;

pub use controller::{CameraRig, RigState};
pub use self::core::{CameraSlot, Pose, SlotId, SLOT_COUNT};
pub use path::PathFollower;
pub use targets::{RenderTargetSet, RenderTargets};
pub use transition::Transition;
