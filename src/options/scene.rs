use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{Pose, SlotId, SLOT_COUNT};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Initial pose and field of view of one slot.
pub struct SlotSetup {
    /// Starting world-space pose.
    pub pose: Pose,
    /// Starting vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for SlotSetup {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            fovy: 60.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
/// Designer-authored waypoint path: a parent origin and its ordered child
/// offsets.
pub struct WaypointPath {
    /// World-space position of the path's parent node.
    pub origin: Vec3,
    /// Child waypoint offsets relative to `origin`, in tour order.
    pub waypoints: Vec<Vec3>,
}

impl WaypointPath {
    /// World-space waypoint positions, in tour order.
    #[must_use]
    pub fn sample(&self) -> Vec<Vec3> {
        self.waypoints.iter().map(|w| self.origin + *w).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scene handles the rig is wired to at start-up.
pub struct SceneSetup {
    /// Initial state of each slot, indexed by [`SlotId::index`].
    pub slots: [SlotSetup; SLOT_COUNT],
    /// Point the orbital slot revolves around. Orbit is inert when absent.
    ///
    /// Omitting the key in a `[scene]` table means "no target", not the
    /// default scene's target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_target: Option<Vec3>,
    /// Waypoint path for the path-follower slot. Path mode is inert when
    /// absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<WaypointPath>,
}

impl SceneSetup {
    /// Setup for `slot`.
    #[must_use]
    pub fn slot(&self, slot: SlotId) -> &SlotSetup {
        &self.slots[slot.index()]
    }

    /// Mutable setup for `slot`.
    pub fn slot_mut(&mut self, slot: SlotId) -> &mut SlotSetup {
        &mut self.slots[slot.index()]
    }
}

impl Default for SceneSetup {
    /// Four cameras strung along the Z axis looking down +Z, orbiting the
    /// origin, with a square tour around it.
    fn default() -> Self {
        let at = |z: f32| SlotSetup {
            pose: Pose {
                position: Vec3::new(0.0, 0.0, z),
                orientation: Quat::IDENTITY,
            },
            fovy: 60.0,
        };
        Self {
            slots: [at(-10.0), at(-5.0), at(0.0), at(5.0)],
            orbit_target: Some(Vec3::ZERO),
            path: Some(WaypointPath {
                origin: Vec3::new(0.0, 2.0, 0.0),
                waypoints: vec![
                    Vec3::new(8.0, 0.0, 8.0),
                    Vec3::new(-8.0, 0.0, 8.0),
                    Vec3::new(-8.0, 0.0, -8.0),
                    Vec3::new(8.0, 0.0, -8.0),
                ],
            }),
        }
    }
}
