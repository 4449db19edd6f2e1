//! Orbit-camera state and the update policy that maps filtered input
//! deltas to new camera angles.

/// Camera state math and pitch-clamp invariant.
pub mod controller;
/// Spherical camera state value type.
pub mod core;

pub use controller::OrbitCameraController;
pub use core::CameraState;
