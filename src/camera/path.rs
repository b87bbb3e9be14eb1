use glam::Vec3;

use super::motion;

/// Waypoint tour for the path-follower slot.
///
/// Holds the positions sampled from the scene's waypoint path at start-up
/// and the index of the waypoint currently being approached. An empty
/// follower is inert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFollower {
    points: Vec<Vec3>,
    index: usize,
    arrival_threshold: f32,
}

impl PathFollower {
    /// Create a follower over `points`, advancing to the next waypoint once
    /// closer than `arrival_threshold`.
    #[must_use]
    pub fn new(points: Vec<Vec3>, arrival_threshold: f32) -> Self {
        Self {
            points,
            index: 0,
            arrival_threshold,
        }
    }

    /// Sampled waypoint positions, in tour order.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Index of the waypoint currently being approached.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The waypoint currently being approached, if any.
    #[must_use]
    pub fn target(&self) -> Option<Vec3> {
        self.points.get(self.index).copied()
    }

    /// Whether there are no waypoints, making path mode a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Advance one frame from `position` and return the new position.
    ///
    /// When `position` has arrived at the current waypoint the target moves to
    /// the next one, wrapping around to the first after the last.
    pub fn step(&mut self, position: Vec3, dt: f32) -> Vec3 {
        let Some(target) = self.target() else {
            return position;
        };
        let target = if position.distance(target) < self.arrival_threshold {
            self.index = (self.index + 1) % self.points.len();
            log::trace!("path follower heading to waypoint {}", self.index);
            self.points[self.index]
        } else {
            target
        };
        motion::seek(position, target, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PathFollower {
        PathFollower::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(10.0, 0.0, 10.0),
            ],
            0.1,
        )
    }

    #[test]
    fn empty_path_is_inert() {
        let mut path = PathFollower::new(Vec::new(), 0.1);
        let start = Vec3::new(1.0, 2.0, 3.0);
        assert!(path.is_empty());
        assert_eq!(path.step(start, 0.5), start);
        assert_eq!(path.index(), 0);
    }

    #[test]
    fn arrival_advances_and_wraps() {
        let mut path = triangle();
        let mut position = path.points()[0];
        let mut seen = Vec::new();
        for _ in 0..7 {
            position = path.step(position, 1.0);
            seen.push(path.index());
            assert!(path.index() < path.points().len());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn far_from_waypoint_keeps_target() {
        let mut path = triangle();
        let position = path.step(Vec3::new(-4.0, 0.0, 0.0), 0.5);
        assert_eq!(path.index(), 0);
        assert_eq!(position, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn single_waypoint_tour_stays_put() {
        let mut path = PathFollower::new(vec![Vec3::ONE], 0.1);
        let position = path.step(Vec3::ONE, 0.2);
        assert_eq!(path.index(), 0);
        assert!(position.abs_diff_eq(Vec3::ONE, 1e-6));
    }
}
