/// Platform-agnostic pointer and focus events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds them into the next [`FrameInput`](super::FrameInput). Keys go
/// through [`InputProcessor::handle_key`](super::InputProcessor::handle_key)
/// instead, since they need a binding lookup.
///
/// Feed either cursor positions or raw pointer motion, not both, or the
/// look delta is counted twice.
///
/// # Example
///
/// ```
/// # use camrig::input::{InputEvent, InputProcessor};
/// let mut input = InputProcessor::new();
/// input.handle_event(InputEvent::PointerMotion { dx: 4.0, dy: -2.0 });
/// let frame = input.take_frame();
/// assert!(frame.pointer_delta.x > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
    /// Relative pointer motion from the device, in screen pixels.
    PointerMotion {
        /// Horizontal motion (right is positive).
        dx: f32,
        /// Vertical motion (down is positive).
        dy: f32,
    },
    /// The window lost focus: release held keys and forget the cursor.
    FocusLost,
}
