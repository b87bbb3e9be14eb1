use glam::Vec2;

use crate::camera::{SlotId, SLOT_COUNT};

/// Input sampled for a single frame, as consumed by
/// [`CameraRig::update`](crate::camera::CameraRig::update).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Which slot selector keys went down this frame, by slot index.
    pub selected: [bool; SLOT_COUNT],
    /// Whether the zoom key is held.
    pub zoom_held: bool,
    /// Pointer motion this frame: +x right, +y up, in look units.
    pub pointer_delta: Vec2,
}

impl FrameInput {
    /// Record a selector key press for `slot`.
    pub fn press(&mut self, slot: SlotId) {
        self.selected[slot.index()] = true;
    }

    /// Whether the selector for `slot` went down this frame.
    #[must_use]
    pub fn is_pressed(&self, slot: SlotId) -> bool {
        self.selected[slot.index()]
    }

    /// The selection request for this frame. When several selectors went
    /// down at once the lowest slot wins.
    #[must_use]
    pub fn selection(&self) -> Option<SlotId> {
        SlotId::ALL.into_iter().find(|slot| self.is_pressed(*slot))
    }
}
