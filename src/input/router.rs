//! Captures raw pointer/touch motion, classifies it, rate-limits it, and
//! buffers the accepted samples for the per-frame camera update.

use std::time::Duration;

use web_time::Instant;

use crate::input::event::PointerMode;
use crate::input::lock::{LockMachine, LockState};
use crate::options::InputOptions;

/// One accepted raw motion sample. Immutable once created; consumed and
/// discarded by the smoothing stage in the camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    /// Horizontal delta in device movement units.
    pub dx: f32,
    /// Vertical delta in device movement units.
    pub dy: f32,
    /// Which device produced the motion.
    pub mode: PointerMode,
    /// Arrival timestamp used for rate limiting.
    pub at: Instant,
}

/// Admission filter between raw platform motion events and the camera.
///
/// Policy:
/// - mouse samples are accepted only while the lock machine is `Locked`;
///   anything arriving outside `Locked` is discarded;
/// - touch samples bypass the lock machine and are always accepted while
///   the session is active;
/// - per-mode rate limiting drops samples arriving sooner than the
///   configured minimum interval after the last accepted one, as well as
///   stale (out-of-order) samples, establishing a total order of accepted
///   samples by timestamp.
///
/// Accepted samples are buffered and drained once per frame by the
/// session's frame callback.
#[derive(Debug)]
pub struct InputRouter {
    lock: LockMachine,
    pending: Vec<InputSample>,
    last_mouse: Option<Instant>,
    last_touch: Option<Instant>,
    mouse_min_interval: Duration,
    touch_min_interval: Duration,
}

impl InputRouter {
    /// Router with rate limits taken from `options`, lock machine in
    /// `Idle`, and an empty sample buffer.
    #[must_use]
    pub fn new(options: &InputOptions) -> Self {
        Self {
            lock: LockMachine::new(),
            pending: Vec::new(),
            last_mouse: None,
            last_touch: None,
            mouse_min_interval: options.mouse_min_interval(),
            touch_min_interval: options.touch_min_interval(),
        }
    }

    /// Current pointer-lock state.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    /// Whether the session currently engages the platform lock (and must
    /// release it on disposal).
    #[must_use]
    pub fn lock_engaged(&self) -> bool {
        matches!(self.lock_state(), LockState::Locked | LockState::Exiting)
    }

    /// Offer a raw motion sample. Returns whether it was accepted into
    /// the frame buffer.
    pub fn push_move(
        &mut self,
        dx: f32,
        dy: f32,
        mode: PointerMode,
        now: Instant,
    ) -> bool {
        let admitted = match mode {
            PointerMode::Mouse => {
                self.lock.accepts_mouse()
                    && Self::admit(
                        &mut self.last_mouse,
                        self.mouse_min_interval,
                        now,
                    )
            }
            PointerMode::Touch => {
                Self::admit(&mut self.last_touch, self.touch_min_interval, now)
            }
        };
        if admitted {
            self.pending.push(InputSample { dx, dy, mode, at: now });
        }
        admitted
    }

    /// Rate-limit gate: accept when at least `min` has elapsed since the
    /// last accepted sample; drop stale timestamps outright.
    fn admit(
        last: &mut Option<Instant>,
        min: Duration,
        now: Instant,
    ) -> bool {
        if let Some(prev) = *last {
            if now < prev {
                return false;
            }
            if now.duration_since(prev) < min {
                return false;
            }
        }
        *last = Some(now);
        true
    }

    /// Surface click. Returns `true` when a platform lock request should
    /// be issued.
    pub fn surface_clicked(&mut self) -> bool {
        self.lock.arm()
    }

    /// Forward a platform lock-change notification.
    pub fn lock_changed(&mut self, locked: bool) {
        self.lock.lock_changed(locked);
    }

    /// Forward a platform lock denial.
    pub fn lock_denied(&mut self) {
        self.lock.deny();
    }

    /// Begin a programmatic lock exit. Returns `true` when the platform
    /// `exit_lock` should be called.
    pub fn begin_exit(&mut self) -> bool {
        self.lock.begin_exit()
    }

    /// Take all samples buffered since the previous frame.
    pub fn take_samples(&mut self) -> Vec<InputSample> {
        std::mem::take(&mut self.pending)
    }

    /// Drop any buffered samples. Called at session disposal.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> InputRouter {
        InputRouter::new(&InputOptions::default())
    }

    fn locked_router() -> InputRouter {
        let mut r = router();
        assert!(r.surface_clicked());
        r.lock_changed(true);
        r
    }

    #[test]
    fn mouse_sample_discarded_outside_locked() {
        let mut r = router();
        let now = Instant::now();
        assert!(!r.push_move(5.0, 0.0, PointerMode::Mouse, now));
        assert!(r.surface_clicked());
        // Still armed, not granted — keep discarding.
        assert!(!r.push_move(5.0, 0.0, PointerMode::Mouse, now));
        assert!(r.take_samples().is_empty());
    }

    #[test]
    fn mouse_sample_accepted_while_locked() {
        let mut r = locked_router();
        assert!(r.push_move(5.0, 1.0, PointerMode::Mouse, Instant::now()));
        let samples = r.take_samples();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].mode, PointerMode::Mouse);
    }

    #[test]
    fn touch_bypasses_lock_machine() {
        let mut r = router();
        assert_eq!(r.lock_state(), LockState::Idle);
        assert!(r.push_move(3.0, 4.0, PointerMode::Touch, Instant::now()));
        assert_eq!(r.take_samples().len(), 1);
    }

    #[test]
    fn rate_limiter_bounds_accepted_mouse_samples() {
        let mut r = locked_router();
        let t0 = Instant::now();
        // 40 samples spread over 4 * 16 ms: at most 5 may pass the gate.
        let mut accepted = 0;
        for i in 0..40_u64 {
            let at = t0 + Duration::from_micros(i * 1600);
            if r.push_move(1.0, 0.0, PointerMode::Mouse, at) {
                accepted += 1;
            }
        }
        assert!(accepted <= 5, "accepted {accepted} samples");
        assert!(accepted >= 1);
    }

    #[test]
    fn stale_mouse_sample_is_dropped() {
        let mut r = locked_router();
        let t0 = Instant::now();
        assert!(r.push_move(
            1.0,
            0.0,
            PointerMode::Mouse,
            t0 + Duration::from_millis(100)
        ));
        // Timestamp older than the last accepted one.
        assert!(!r.push_move(1.0, 0.0, PointerMode::Mouse, t0));
    }

    #[test]
    fn touch_uses_its_own_looser_interval() {
        let opts = InputOptions::default();
        let mut r = router();
        let t0 = Instant::now();
        assert!(r.push_move(1.0, 0.0, PointerMode::Touch, t0));
        // Within the touch interval: dropped.
        assert!(!r.push_move(
            1.0,
            0.0,
            PointerMode::Touch,
            t0 + Duration::from_millis(opts.touch_min_interval_ms - 1)
        ));
        // At the interval boundary: accepted.
        assert!(r.push_move(
            1.0,
            0.0,
            PointerMode::Touch,
            t0 + Duration::from_millis(opts.touch_min_interval_ms)
        ));
    }

    #[test]
    fn clear_empties_the_frame_buffer() {
        let mut r = router();
        assert!(r.push_move(3.0, 4.0, PointerMode::Touch, Instant::now()));
        r.clear();
        assert!(r.take_samples().is_empty());
    }
}
