//! Input handling: platform-agnostic events, the pointer-lock state
//! machine, and the router that filters raw samples for the camera.

/// Platform-agnostic input events.
pub mod event;
/// Pointer-lock state machine.
pub mod lock;
/// Sample admission, rate limiting, and per-frame buffering.
pub mod router;

pub use event::{InputEvent, PointerMode};
pub use lock::{LockMachine, LockState};
pub use router::{InputRouter, InputSample};
