/// Platform-agnostic input events.
///
/// The host translates raw platform callbacks (pointer-lock `movementX`/
/// `movementY`, touch drags, lock-change notifications) into these and
/// feeds them to
/// [`SessionManager::handle_input`](crate::session::SessionManager::handle_input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion.
    PointerMoved {
        /// Horizontal delta in device movement units.
        dx: f32,
        /// Vertical delta in device movement units.
        dy: f32,
        /// Which device produced the motion.
        mode: PointerMode,
    },
    /// Primary click (or tap) on the drawing surface.
    SurfaceClicked,
    /// The platform's pointer-lock state changed.
    LockChanged {
        /// `true` on grant, `false` on release (user ESC, focus loss, or
        /// programmatic exit).
        locked: bool,
    },
    /// The platform refused a pointer-lock request.
    LockDenied,
}

/// Which device class a motion sample came from.
///
/// Touch samples bypass the pointer-lock state machine entirely: the lock
/// mechanism is unavailable for touch input, so a touch session relies on
/// the host suppressing the platform's default scroll/zoom gesture on the
/// surface instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerMode {
    /// Mouse motion, meaningful only while pointer lock is held.
    Mouse,
    /// Touch-drag motion, always accepted while the surface is active.
    Touch,
}
