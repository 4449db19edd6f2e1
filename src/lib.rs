// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Session, camera, and input core for a panoramic virtual-tour viewer.
//!
//! Panotour owns the algorithmic and lifecycle heart of a 360° panorama
//! viewer: turning raw pointer/touch motion into smooth orbit-camera
//! rotation, running the pointer-lock state machine, and sequencing the
//! lifetime of a render session (engine + panorama dome + camera) with
//! race-safe teardown under in-flight asynchronous initialization.
//!
//! Rendering, image decoding, and the platform's pointer-lock facility
//! stay outside the crate, consumed through the [`platform`] traits.
//!
//! # Key entry points
//!
//! - [`session::SessionManager`] - session lifecycle, input routing,
//!   status stream
//! - [`camera::OrbitCameraController`] - the delta-to-angles update
//!   policy
//! - [`input::InputRouter`] - sample admission, rate limiting, and the
//!   pointer-lock state machine
//! - [`options::Options`] - runtime tunables (sensitivities, limits,
//!   rate intervals)
//!
//! # Architecture
//!
//! Everything runs on the host's main thread. The host forwards platform
//! input as [`input::InputEvent`] values and drives
//! [`session::SessionManager::pump`] from its event loop; the engine's
//! per-frame callback drains buffered input into the camera and hands
//! back the pose for the next render call.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod platform;
pub mod session;

pub use camera::{CameraState, OrbitCameraController};
pub use error::PanoError;
pub use input::{InputEvent, PointerMode};
pub use options::Options;
pub use platform::{ImageRef, PanoramaLoader, PointerLock, RenderEngine};
pub use session::{
    Notice, SessionEvent, SessionId, SessionManager, SessionStatus,
};
