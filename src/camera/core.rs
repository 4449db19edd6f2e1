use std::f32::consts::FRAC_PI_2;

use crate::options::CameraOptions;

/// Spherical orbit-camera state for a panoramic scene.
///
/// The camera sits at a fixed pivot inside the panorama dome and is
/// parameterized by yaw (`alpha`) and pitch (`beta`). Invariant:
/// `beta_min <= beta <= beta_max` holds after every update — this is what
/// prevents the view from flipping past the zenith or nadir. `alpha` is
/// unbounded and wraps implicitly.
///
/// Owned exclusively by [`OrbitCameraController`](super::OrbitCameraController);
/// mutated only through its `update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Yaw angle in radians.
    pub alpha: f32,
    /// Pitch angle in radians, always within `[beta_min, beta_max]`.
    pub beta: f32,
    /// Lower pitch limit in radians.
    pub beta_min: f32,
    /// Upper pitch limit in radians.
    pub beta_max: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
}

impl CameraState {
    /// Initial state: looking at the horizon (`beta = π/2`), yaw zero.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            alpha: 0.0,
            beta: FRAC_PI_2.clamp(options.beta_min, options.beta_max),
            beta_min: options.beta_min,
            beta_max: options.beta_max,
            fov: options.fov,
        }
    }
}
