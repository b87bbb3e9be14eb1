use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Number of camera slots in a rig.
pub const SLOT_COUNT: usize = 4;

/// Identity of one of the four rig slots.
///
/// The discriminant is the slot index used by key bindings and scene files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SlotId {
    /// Slot 0: revolves around the orbit target.
    #[default]
    Orbital = 0,
    /// Slot 1: mid-shot with hold-to-zoom.
    MidShot = 1,
    /// Slot 2: pointer-driven first-person look.
    FirstPerson = 2,
    /// Slot 3: follows the waypoint path.
    PathFollower = 3,
}

impl SlotId {
    /// All slots in index order.
    pub const ALL: [SlotId; SLOT_COUNT] = [
        SlotId::Orbital,
        SlotId::MidShot,
        SlotId::FirstPerson,
        SlotId::PathFollower,
    ];

    /// Map an index to a slot. Out-of-range indices fall back to
    /// [`SlotId::Orbital`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Zero-based index of this slot.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short human-readable name, used in log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Orbital => "orbital",
            Self::MidShot => "mid-shot",
            Self::FirstPerson => "first-person",
            Self::PathFollower => "path-follower",
        }
    }
}

/// Position and orientation of a camera in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Pose at `position` with identity orientation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Blend toward `end` by `t` (clamped to `[0, 1]`).
    ///
    /// Position is linearly interpolated. Orientation uses glam's
    /// component-wise quaternion lerp followed by normalization, not slerp,
    /// so angular velocity is not constant across the blend.
    #[must_use]
    pub fn lerp(&self, end: &Pose, t: f32) -> Pose {
        let t = t.clamp(0.0, 1.0);
        Pose {
            position: self.position.lerp(end.position, t),
            orientation: self.orientation.lerp(end.orientation, t),
        }
    }
}

/// One addressable camera: a pose, a field of view and clip planes.
///
/// Poses use a left-handed, +Y-up convention where the camera looks down its
/// local +Z axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSlot {
    /// Which slot this is.
    pub id: SlotId,
    /// Current world-space pose.
    pub pose: Pose,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl CameraSlot {
    /// Create a slot with the given pose and field of view.
    #[must_use]
    pub fn new(id: SlotId, pose: Pose, fovy: f32, znear: f32, zfar: f32) -> Self {
        Self {
            id,
            pose,
            fovy,
            znear,
            zfar,
        }
    }

    /// World-space viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.pose.orientation * Vec3::Z
    }

    /// World-space up direction of the camera.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.pose.orientation * Vec3::Y
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.pose.position, self.forward(), self.up())
    }

    /// Perspective projection for the given viewport aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }
}
