//! Per-mode motion models.
//!
//! Each function advances one slot by one frame over plain values.

use glam::{Quat, Vec2, Vec3};

use super::core::Pose;

/// Revolve `pose` around `pivot` about world up by `degrees`.
///
/// Both position and orientation are rotated, so a camera that faces the
/// pivot keeps facing it.
#[must_use]
pub fn orbit(pose: &Pose, pivot: Vec3, degrees: f32) -> Pose {
    let rotation = Quat::from_rotation_y(degrees.to_radians());
    Pose {
        position: pivot + rotation * (pose.position - pivot),
        orientation: (rotation * pose.orientation).normalize(),
    }
}

/// Apply a first-person look step.
///
/// Yaw (`degrees.x`) is applied about world up, then pitch (`degrees.y`) about
/// the already-yawed local left axis. Pitch is not clamped: the camera can
/// roll over the poles.
#[must_use]
pub fn look(orientation: Quat, degrees: Vec2) -> Quat {
    let yaw = Quat::from_axis_angle(Vec3::Y, degrees.x.to_radians());
    let pitch = Quat::from_axis_angle(Vec3::NEG_X, degrees.y.to_radians());
    (yaw * orientation * pitch).normalize()
}

/// Exponential approach of `current` toward `target`.
///
/// The blend factor is `rate * dt` clamped to `[0, 1]`, so the value never
/// overshoots and only reaches the target exactly when a single frame is long
/// enough to saturate the factor.
#[must_use]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = (rate * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}

/// Move `position` toward `target` by a fraction `dt` of the remaining gap.
///
/// Convergence speed is tied directly to frame time.
#[must_use]
pub fn seek(position: Vec3, target: Vec3, dt: f32) -> Vec3 {
    position.lerp(target, dt.clamp(0.0, 1.0))
}
