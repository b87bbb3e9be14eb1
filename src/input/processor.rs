//! Folds raw platform events into per-frame rig input.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held keys, pending selector presses) and the key-binding map. It is the
//! only thing that sits between raw window events and
//! [`CameraRig::update`](crate::camera::CameraRig::update).

use glam::Vec2;

use super::event::InputEvent;
use super::frame::FrameInput;
use super::keyboard::RigAction;
use crate::options::KeybindingOptions;

/// Screen pixels to look units. One unit of look input turns the
/// first-person camera by the rig's look sensitivity in degrees per second.
const DEFAULT_POINTER_SCALE: f32 = 0.1;

/// Accumulates events between frames into a [`FrameInput`].
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_key("Digit2", true);
/// input.handle_event(InputEvent::CursorMoved { x, y });
///
/// // Once per frame:
/// let frame = input.take_frame();
/// rig.update(dt, &frame, &mut targets);
/// ```
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Last known cursor position, for turning positions into deltas.
    last_cursor: Option<Vec2>,
    /// Multiplier from screen pixels to look units.
    pointer_scale: f32,
    /// Input gathered since the last `take_frame`.
    pending: FrameInput,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(mut key_bindings: KeybindingOptions) -> Self {
        key_bindings.rebuild_reverse_map();
        Self {
            key_bindings,
            last_cursor: None,
            pointer_scale: DEFAULT_POINTER_SCALE,
            pending: FrameInput::default(),
        }
    }

    /// Override the pixel-to-look-unit multiplier.
    #[must_use]
    pub fn with_pointer_scale(mut self, pointer_scale: f32) -> Self {
        self.pointer_scale = pointer_scale;
        self
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    ///
    /// Call [`KeybindingOptions::rebuild_reverse_map`] after editing
    /// `bindings` directly.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Whether the zoom key is currently held.
    #[must_use]
    pub fn zoom_held(&self) -> bool {
        self.pending.zoom_held
    }

    /// Input gathered so far this frame.
    #[must_use]
    pub fn pending(&self) -> &FrameInput {
        &self.pending
    }

    /// Apply a key press or release and return the bound action, if any.
    ///
    /// `key` uses the `winit::keyboard::KeyCode` debug format (`"Digit1"`,
    /// `"KeyZ"`, ...). Selector keys only register on press; the zoom key
    /// tracks press and release.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<RigAction> {
        let action = self.key_bindings.lookup(key)?;
        match action.slot() {
            Some(slot) if pressed => self.pending.press(slot),
            Some(_) => {}
            None => self.pending.zoom_held = pressed,
        }
        Some(action)
    }

    /// Fold a pointer or focus event into the pending frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let position = Vec2::new(x, y);
                if let Some(last) = self.last_cursor {
                    self.accumulate_screen_delta(position - last);
                }
                self.last_cursor = Some(position);
            }
            InputEvent::PointerMotion { dx, dy } => {
                self.accumulate_screen_delta(Vec2::new(dx, dy));
            }
            InputEvent::FocusLost => {
                self.pending.zoom_held = false;
                self.last_cursor = None;
            }
        }
    }

    /// Hand out this frame's input and start the next one.
    ///
    /// Selector presses and pointer motion are per-frame and reset; the
    /// zoom key stays held until released.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = self.pending;
        self.pending = FrameInput {
            zoom_held: frame.zoom_held,
            ..FrameInput::default()
        };
        frame
    }

    /// Screen space is y-down; look input is y-up.
    fn accumulate_screen_delta(&mut self, delta: Vec2) {
        self.pending.pointer_delta +=
            Vec2::new(delta.x, -delta.y) * self.pointer_scale;
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::SlotId;

    #[test]
    fn selector_press_lands_in_one_frame_only() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_key("Digit3", true),
            Some(RigAction::SelectFirstPerson)
        );
        assert_eq!(input.take_frame().selection(), Some(SlotId::FirstPerson));
        assert_eq!(input.take_frame().selection(), None);
    }

    #[test]
    fn selector_release_is_ignored() {
        let mut input = InputProcessor::new();
        let _ = input.handle_key("Digit2", false);
        assert_eq!(input.take_frame().selection(), None);
    }

    #[test]
    fn zoom_stays_held_across_frames_until_release() {
        let mut input = InputProcessor::new();
        let _ = input.handle_key("KeyZ", true);
        assert!(input.take_frame().zoom_held);
        assert!(input.take_frame().zoom_held);
        let _ = input.handle_key("KeyZ", false);
        assert!(!input.take_frame().zoom_held);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_key("KeyQ", true), None);
        assert_eq!(input.take_frame(), FrameInput::default());
    }

    #[test]
    fn cursor_positions_become_y_up_deltas() {
        let mut input = InputProcessor::new().with_pointer_scale(1.0);
        // First position only seeds tracking.
        input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        assert_eq!(input.pending().pointer_delta, Vec2::ZERO);

        input.handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 });
        input.handle_event(InputEvent::CursorMoved { x: 112.0, y: 90.0 });
        let frame = input.take_frame();
        assert_eq!(frame.pointer_delta, Vec2::new(12.0, 10.0));
        assert_eq!(input.take_frame().pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn pointer_motion_is_scaled() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::PointerMotion { dx: 10.0, dy: 20.0 });
        let delta = input.take_frame().pointer_delta;
        assert!(delta.abs_diff_eq(Vec2::new(1.0, -2.0), 1e-6));
    }

    #[test]
    fn focus_loss_releases_zoom_and_cursor() {
        let mut input = InputProcessor::new().with_pointer_scale(1.0);
        let _ = input.handle_key("KeyZ", true);
        input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.handle_event(InputEvent::FocusLost);
        input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 500.0 });

        let frame = input.take_frame();
        assert!(!frame.zoom_held);
        assert_eq!(frame.pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(RigAction::SelectPathFollower, "KeyP");
        let mut input = InputProcessor::with_key_bindings(bindings);
        let _ = input.handle_key("KeyP", true);
        assert_eq!(input.take_frame().selection(), Some(SlotId::PathFollower));
        assert_eq!(input.handle_key("Digit4", true), None);
    }
}
