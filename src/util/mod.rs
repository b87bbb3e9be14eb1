//! Shared utilities for hosts driving the rig.

/// Frame delta measurement, FPS smoothing and pacing.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
