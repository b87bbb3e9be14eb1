use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Rig", inline)]
#[serde(default)]
/// Motion tuning for the four rig modes and the blend between them.
pub struct RigOptions {
    /// Orbital slot angular speed in degrees per second.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub orbit_speed: f32,
    /// Blend progress gained per second of frame time.
    #[schemars(title = "Transition Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub transition_speed: f32,
    /// Mid-shot field of view when not zooming, in degrees.
    #[schemars(title = "Default FOV", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub default_fov: f32,
    /// Mid-shot field of view while zoom is held, in degrees.
    #[schemars(title = "Zoom FOV", range(min = 5.0, max = 90.0), extend("step" = 1.0))]
    pub zoom_fov: f32,
    /// Exponential approach rate of the zoom, per second.
    #[schemars(title = "Zoom Rate", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub zoom_rate: f32,
    /// First-person degrees per unit of pointer delta per second.
    #[schemars(title = "Look Sensitivity", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub look_sensitivity: f32,
    /// Distance at which the path follower counts a waypoint as reached.
    #[schemars(title = "Waypoint Radius", range(min = 0.01, max = 5.0), extend("step" = 0.01))]
    pub path_arrival_threshold: f32,
    /// Near clipping plane distance for every slot.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance for every slot.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            orbit_speed: 50.0,
            transition_speed: 2.0,
            default_fov: 60.0,
            zoom_fov: 30.0,
            zoom_rate: 5.0,
            look_sensitivity: 100.0,
            path_arrival_threshold: 0.1,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}

impl RigOptions {
    /// Check that `transition_speed` and `zoom_rate` are positive. A
    /// non-positive `transition_speed` never completes a blend.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::OptionsParse`] naming the first bad rate.
    pub fn validate(&self) -> Result<(), RigError> {
        for (name, value) in self.rates() {
            if !is_positive(value) {
                return Err(RigError::OptionsParse(format!(
                    "rig.{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Replace any rate that [`validate`](Self::validate) would reject with
    /// its default.
    #[must_use]
    pub fn with_usable_rates(mut self) -> Self {
        let defaults = Self::default();
        if !is_positive(self.transition_speed) {
            log::warn!(
                "transition_speed {} is not positive, using {}",
                self.transition_speed,
                defaults.transition_speed
            );
            self.transition_speed = defaults.transition_speed;
        }
        if !is_positive(self.zoom_rate) {
            log::warn!(
                "zoom_rate {} is not positive, using {}",
                self.zoom_rate,
                defaults.zoom_rate
            );
            self.zoom_rate = defaults.zoom_rate;
        }
        self
    }

    fn rates(&self) -> [(&'static str, f32); 2] {
        [
            ("transition_speed", self.transition_speed),
            ("zoom_rate", self.zoom_rate),
        ]
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
