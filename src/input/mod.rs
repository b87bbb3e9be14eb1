//! Input handling: event types, bindable actions, and the input processor
//! that turns raw window events into per-frame rig input.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input sample consumed by the rig.
pub mod frame;
/// Bindable rig actions.
pub mod keyboard;
/// Folds raw events into per-frame input.
pub mod processor;
/// `winit` event adapter.
#[cfg(feature = "viewer")]
pub mod window;

pub use event::InputEvent;
pub use frame::FrameInput;
pub use keyboard::RigAction;
pub use processor::InputProcessor;
