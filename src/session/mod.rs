//! Session lifecycle: coordinates engine + panorama acquisition into one
//! owned session value and guarantees idempotent, race-safe teardown.

/// The session lifecycle manager and its frame-loop state.
pub mod manager;

pub use manager::SessionManager;

/// Identifier of one `start_session` call. Late asynchronous completions
/// carry it so results for replaced or disposed sessions can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Read-only session status surfaced to the host for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No session running.
    Idle,
    /// Engine and/or panorama acquisition in flight.
    Loading,
    /// Frame loop running; the panorama is interactive.
    Ready,
    /// Acquisition failed. Recoverable: retry `start_session`.
    Error,
}

/// User-facing hints the host may render as transient messages.
///
/// These mirror what the viewer tells the user at each interaction step;
/// the host decides presentation (toast, overlay, nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The panorama is ready; clicking the surface enters free-look.
    EnterFreeLookHint,
    /// Pointer lock granted; ESC leaves free-look.
    FreeLookEntered,
    /// Pointer lock released.
    FreeLookExited,
    /// The platform refused pointer lock; touch interaction still works.
    LockUnavailable,
}

/// Event delivered to the host's session callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session status changed.
    Status(SessionStatus),
    /// A user-facing hint.
    Notice(Notice),
}
