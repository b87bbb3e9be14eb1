use serde::{Deserialize, Serialize};

use crate::camera::SlotId;

/// Rig actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// select_first_person = "Digit3"
/// zoom = "KeyZ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigAction {
    /// Switch to the orbital camera.
    SelectOrbital,
    /// Switch to the mid-shot camera.
    SelectMidShot,
    /// Switch to the first-person camera.
    SelectFirstPerson,
    /// Switch to the path-follower camera.
    SelectPathFollower,
    /// Hold to zoom the mid-shot camera.
    Zoom,
}

impl RigAction {
    /// The slot a selection action switches to, or `None` for zoom.
    #[must_use]
    pub fn slot(self) -> Option<SlotId> {
        match self {
            Self::SelectOrbital => Some(SlotId::Orbital),
            Self::SelectMidShot => Some(SlotId::MidShot),
            Self::SelectFirstPerson => Some(SlotId::FirstPerson),
            Self::SelectPathFollower => Some(SlotId::PathFollower),
            Self::Zoom => None,
        }
    }
}
