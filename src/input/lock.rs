//! Pointer-lock state machine.
//!
//! One machine exists per active session and decides whether mouse-move
//! samples are accepted. Touch input never consults it.

/// Pointer-lock lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// No lock held or requested. Entered at session start and whenever
    /// the lock is released or denied.
    Idle,
    /// A lock request is in flight after a surface click.
    Armed,
    /// The platform granted the lock; mouse samples are accepted.
    Locked,
    /// A programmatic exit was issued; resolves to `Idle` on the release
    /// notification.
    Exiting,
}

/// Tracks pointer-lock state across click, grant, denial, and release.
#[derive(Debug)]
pub struct LockMachine {
    state: LockState,
}

impl LockMachine {
    /// New machine in `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LockState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Whether mouse-move samples are currently accepted.
    #[must_use]
    pub fn accepts_mouse(&self) -> bool {
        self.state == LockState::Locked
    }

    /// User clicked the surface. Returns `true` when a platform lock
    /// request should be issued (`Idle -> Armed`); clicks in any other
    /// state are ignored.
    pub fn arm(&mut self) -> bool {
        if self.state == LockState::Idle {
            self.state = LockState::Armed;
            return true;
        }
        false
    }

    /// Lock-change notification from the platform.
    ///
    /// A grant moves any state to `Locked` (grants can arrive without a
    /// preceding click on some platforms, e.g. via the fullscreen path);
    /// a release always resolves to `Idle`, including from `Exiting`.
    pub fn lock_changed(&mut self, locked: bool) {
        self.state = if locked {
            LockState::Locked
        } else {
            LockState::Idle
        };
    }

    /// The platform denied an in-flight lock request. Non-fatal: the
    /// machine demotes to `Idle` and the surface stays interactive via
    /// touch.
    pub fn deny(&mut self) {
        if self.state == LockState::Armed {
            self.state = LockState::Idle;
        }
    }

    /// Programmatic exit requested. Returns `true` when the platform
    /// `exit_lock` should be called (`Locked -> Exiting`).
    pub fn begin_exit(&mut self) -> bool {
        if self.state == LockState::Locked {
            self.state = LockState::Exiting;
            return true;
        }
        false
    }
}

impl Default for LockMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_arms_only_from_idle() {
        let mut lock = LockMachine::new();
        assert!(lock.arm());
        assert_eq!(lock.state(), LockState::Armed);
        // A second click while armed is ignored.
        assert!(!lock.arm());
        assert_eq!(lock.state(), LockState::Armed);
    }

    #[test]
    fn grant_and_release_cycle() {
        let mut lock = LockMachine::new();
        assert!(lock.arm());
        lock.lock_changed(true);
        assert_eq!(lock.state(), LockState::Locked);
        assert!(lock.accepts_mouse());
        // User hits ESC (or OS steals focus).
        lock.lock_changed(false);
        assert_eq!(lock.state(), LockState::Idle);
        assert!(!lock.accepts_mouse());
    }

    #[test]
    fn denial_demotes_to_idle() {
        let mut lock = LockMachine::new();
        assert!(lock.arm());
        lock.deny();
        assert_eq!(lock.state(), LockState::Idle);
        // The surface remains clickable afterwards.
        assert!(lock.arm());
    }

    #[test]
    fn programmatic_exit_resolves_to_idle() {
        let mut lock = LockMachine::new();
        assert!(lock.arm());
        lock.lock_changed(true);
        assert!(lock.begin_exit());
        assert_eq!(lock.state(), LockState::Exiting);
        assert!(!lock.accepts_mouse());
        lock.lock_changed(false);
        assert_eq!(lock.state(), LockState::Idle);
    }

    #[test]
    fn exit_outside_locked_is_a_no_op() {
        let mut lock = LockMachine::new();
        assert!(!lock.begin_exit());
        assert!(lock.arm());
        assert!(!lock.begin_exit());
        assert_eq!(lock.state(), LockState::Armed);
    }

    #[test]
    fn unsolicited_grant_is_accepted() {
        // Fullscreen entry can grant a lock without a surface click.
        let mut lock = LockMachine::new();
        lock.lock_changed(true);
        assert_eq!(lock.state(), LockState::Locked);
    }
}
