//! Feeding `winit` events straight into an [`InputProcessor`].

use winit::event::{DeviceEvent, KeyEvent, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::InputEvent;
use super::processor::InputProcessor;

/// Binding string for a physical key, in `KeyCode` debug format.
#[must_use]
pub fn key_string(event: &KeyEvent) -> Option<String> {
    match event.physical_key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}

impl InputProcessor {
    /// Consume the window events the rig cares about. Returns true if the
    /// event was used.
    ///
    /// OS key repeats are dropped so a held selector key only selects once.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return false;
                }
                key_string(event).is_some_and(|key| {
                    self.handle_key(&key, event.state.is_pressed()).is_some()
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                true
            }
            WindowEvent::Focused(false) => {
                self.handle_event(InputEvent::FocusLost);
                true
            }
            _ => false,
        }
    }

    /// Consume raw device motion, for hosts that grab the cursor. Do not
    /// also forward `CursorMoved` in that case.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) -> bool {
        match event {
            DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                self.handle_event(InputEvent::PointerMotion {
                    dx: *dx as f32,
                    dy: *dy as f32,
                });
                true
            }
            _ => false,
        }
    }
}
