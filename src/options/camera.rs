use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit-camera sensitivity and limit parameters.
///
/// These are the single tunable table for the look controls: earlier
/// iterations of the viewer shipped three diverging sensitivity/smoothing
/// formulas, consolidated here.
pub struct CameraOptions {
    /// Rotation per mouse movement unit, in radians. Mouse deltas arrive
    /// frequently and fine-grained, so this is the smaller constant.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub mouse_sensitivity: f32,
    /// Rotation per touch movement unit, in radians. Touch deltas are
    /// coarser and less frequent than mouse deltas, so this is larger.
    #[schemars(title = "Touch Sensitivity", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub touch_sensitivity: f32,
    /// Maximum magnitude of a single scaled delta component, in radians.
    /// Suppresses single-frame spikes from pointer-lock re-acquisition or
    /// event coalescing.
    #[schemars(title = "Max Step", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub max_step: f32,
    /// Vertical field of view in radians.
    #[schemars(title = "Field of View", range(min = 0.5, max = 1.8), extend("step" = 0.05))]
    pub fov: f32,
    /// Lower pitch limit in radians (distance kept from the nadir).
    #[schemars(skip)]
    pub beta_min: f32,
    /// Upper pitch limit in radians (distance kept from the zenith).
    #[schemars(skip)]
    pub beta_max: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.003,
            touch_sensitivity: 0.008,
            max_step: 0.1,
            fov: 1.0,
            beta_min: 0.1,
            beta_max: PI - 0.1,
        }
    }
}
