//! Blend state for switching the visible camera from one slot to another.

use super::core::{Pose, SlotId};

/// An in-flight blend between two slots.
///
/// Progress is a plain accumulator of `dt * speed`, not a fraction of a
/// wall-clock duration. The blend finishes on the first advance that takes
/// progress to 1 or beyond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: SlotId,
    target: SlotId,
    start: Pose,
    end: Pose,
    progress: f32,
}

impl Transition {
    /// Begin a blend from `start` (the outgoing slot's pose) toward `end`
    /// (the target slot's pose, captured now).
    #[must_use]
    pub fn new(from: SlotId, target: SlotId, start: Pose, end: Pose) -> Self {
        Self {
            from,
            target,
            start,
            end,
            progress: 0.0,
        }
    }

    /// Slot that was active when the blend began.
    #[must_use]
    pub fn origin(&self) -> SlotId {
        self.from
    }

    /// Slot that becomes active when the blend completes.
    #[must_use]
    pub fn target(&self) -> SlotId {
        self.target
    }

    /// Pose captured from the outgoing slot at the start of the blend.
    #[must_use]
    pub fn start(&self) -> &Pose {
        &self.start
    }

    /// Pose captured from the target slot at the start of the blend.
    #[must_use]
    pub fn end(&self) -> &Pose {
        &self.end
    }

    /// Accumulated progress. May exceed 1 on the completing frame.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether progress has reached the end of the blend.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Accumulate `dt * speed` and return the blended pose for this frame.
    ///
    /// Negative frame times are treated as zero so progress never decreases.
    pub fn advance(&mut self, dt: f32, speed: f32) -> Pose {
        self.progress += (dt * speed).max(0.0);
        self.pose()
    }

    /// Blended pose at the current progress.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.start.lerp(&self.end, self.progress)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    fn blend() -> Transition {
        Transition::new(
            SlotId::Orbital,
            SlotId::FirstPerson,
            Pose::at(Vec3::new(0.0, 0.0, -10.0)),
            Pose {
                position: Vec3::ZERO,
                orientation: Quat::from_rotation_y(1.0),
            },
        )
    }

    #[test]
    fn progress_accumulates_dt_times_speed() {
        let mut t = blend();
        let pose = t.advance(0.1, 2.0);
        assert!((t.progress() - 0.2).abs() < 1e-6);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, -8.0), 1e-5));
        assert!(!t.is_complete());
    }

    #[test]
    fn overshoot_lands_exactly_on_end_pose() {
        let mut t = blend();
        let pose = t.advance(0.75, 2.0);
        assert!(t.is_complete());
        assert!(t.progress() > 1.0);
        assert_eq!(pose.position, t.end().position);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut t = blend();
        let _ = t.advance(0.1, 2.0);
        let before = t.progress();
        let _ = t.advance(-0.5, 2.0);
        assert_eq!(t.progress(), before);
    }

    #[test]
    fn endpoints_are_fixed_at_creation() {
        let t = blend();
        assert_eq!(t.origin(), SlotId::Orbital);
        assert_eq!(t.target(), SlotId::FirstPerson);
        assert_eq!(t.start().position, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(t.progress(), 0.0);
    }
}
