use glam::Vec2;

use crate::camera::core::CameraState;
use crate::input::PointerMode;
use crate::options::CameraOptions;

/// Maps filtered input deltas to new orbit-camera angles.
///
/// The update pipeline per raw delta:
///
/// 1. scale by the mode-dependent sensitivity (touch deltas are reported
///    in coarser, less frequent units than mouse deltas, so they get the
///    larger constant);
/// 2. clamp each component to `max_step` to suppress single-frame spikes
///    caused by pointer-lock re-acquisition or event coalescing;
/// 3. average with the previous cycle's clamped delta (one-step low-pass
///    filter) to reduce visible jitter without perceptible input lag;
/// 4. apply: `alpha -= dx`, `beta = clamp(beta - dy, beta_min, beta_max)`.
///
/// The pitch clamp in step 4 runs unconditionally on every call. The
/// first sample after construction or [`reset_smoothing`](Self::reset_smoothing)
/// skips the averaging in step 3, so an isolated sample produces its full
/// clamped rotation.
pub struct OrbitCameraController {
    state: CameraState,
    /// Previous cycle's clamped delta, retained for the low-pass filter.
    prev_delta: Option<Vec2>,
    mouse_sensitivity: f32,
    touch_sensitivity: f32,
    max_step: f32,
}

impl OrbitCameraController {
    /// Controller at the initial pose described by `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            state: CameraState::new(options),
            prev_delta: None,
            mouse_sensitivity: options.mouse_sensitivity,
            touch_sensitivity: options.touch_sensitivity,
            max_step: options.max_step,
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Apply one raw input delta and return the resulting pose.
    ///
    /// Pure with respect to everything except the retained previous
    /// delta; no error conditions.
    pub fn update(&mut self, raw: Vec2, mode: PointerMode) -> CameraState {
        let sensitivity = match mode {
            PointerMode::Mouse => self.mouse_sensitivity,
            PointerMode::Touch => self.touch_sensitivity,
        };

        let scaled = raw * sensitivity;
        let clamped = Vec2::new(
            scaled.x.clamp(-self.max_step, self.max_step),
            scaled.y.clamp(-self.max_step, self.max_step),
        );
        let smoothed = match self.prev_delta {
            Some(prev) => (clamped + prev) * 0.5,
            None => clamped,
        };
        self.prev_delta = Some(clamped);

        self.state.alpha -= smoothed.x;
        self.state.beta = (self.state.beta - smoothed.y)
            .clamp(self.state.beta_min, self.state.beta_max);
        self.state
    }

    /// Forget the retained delta so the next sample passes unaveraged.
    ///
    /// Called when pointer lock is re-acquired: the previous delta belongs
    /// to a different interaction episode.
    pub fn reset_smoothing(&mut self) {
        self.prev_delta = None;
    }
}
