//! Coordinates asynchronous acquisition of engine + panorama into one
//! owned session value, and guarantees idempotent, race-safe teardown.
//!
//! # Model
//!
//! All core logic runs on the host's main thread. The only asynchronous
//! operations are engine creation and panorama loading, started by
//! [`SessionManager::start_session`]: their platform callbacks post
//! completions onto an internal channel, and [`SessionManager::pump`]
//! applies them on the host thread. Once a session is established, all
//! per-frame and per-input work is synchronous.
//!
//! Every completion is tagged with its [`SessionId`]; the session's
//! `alive` flag doubles as a cancellation token, so completions that
//! arrive after disposal (or after a session swap) are discarded instead
//! of mutating a dead session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use glam::Vec2;
use web_time::Instant;

use crate::camera::{CameraState, OrbitCameraController};
use crate::error::PanoError;
use crate::input::{InputEvent, InputRouter, LockState};
use crate::options::Options;
use crate::platform::{
    AssetId, EngineId, FrameFn, ImageRef, PanoramaLoader, PointerLock,
    RenderEngine, SurfaceId,
};
use crate::session::{Notice, SessionEvent, SessionId, SessionStatus};

/// Host callback receiving status changes and user-facing notices.
pub type EventFn = Box<dyn FnMut(SessionEvent)>;

/// Completion of one asynchronous acquisition, applied by `pump`.
enum Completion {
    /// Engine creation finished.
    Engine {
        session: SessionId,
        result: Result<EngineId, String>,
    },
    /// Panorama load finished.
    Asset {
        session: SessionId,
        result: Result<AssetId, String>,
    },
}

/// State shared between the manager and the engine's frame callback.
///
/// The `alive` flag is the cancellation token: flipped exactly once, at
/// disposal, after which the frame callback reports `None` and every
/// late completion is discarded.
struct FrameShared {
    alive: AtomicBool,
    state: Mutex<FrameState>,
}

/// Router and camera drained/updated once per frame.
struct FrameState {
    router: InputRouter,
    camera: OrbitCameraController,
}

/// Drain buffered input samples into the camera and return the pose for
/// the next render call, or `None` once the session is disposed.
fn frame_tick(shared: &FrameShared) -> Option<CameraState> {
    if !shared.alive.load(Ordering::SeqCst) {
        return None;
    }
    let mut st = shared.state.lock().ok()?;
    let samples = st.router.take_samples();
    let mut pose = st.camera.state();
    for sample in samples {
        pose = st
            .camera
            .update(Vec2::new(sample.dx, sample.dy), sample.mode);
    }
    Some(pose)
}

/// The bundle of handles alive for one panoramic view instance.
///
/// Exclusively owned by the manager; at most one exists per manager at
/// any time. The drawing surface and its graphics context belong to this
/// session alone until disposal.
struct SceneSession {
    id: SessionId,
    engine: Option<EngineId>,
    asset: Option<AssetId>,
    loop_running: bool,
    shared: Arc<FrameShared>,
}

/// Owns the platform collaborators and at most one live [`SceneSession`].
///
/// # Lifecycle
///
/// - [`start_session`](Self::start_session) tears down any previous
///   session first, then acquires the engine and the panorama in
///   parallel; the frame loop starts only when both are ready.
/// - [`pump`](Self::pump) applies acquisition completions; the host calls
///   it from its event loop (per frame is fine).
/// - [`dispose`](Self::dispose) is idempotent and never panics, no matter
///   how it interleaves with in-flight acquisition.
pub struct SessionManager {
    engine: Box<dyn RenderEngine>,
    loader: Box<dyn PanoramaLoader>,
    lock: Box<dyn PointerLock>,
    surface: SurfaceId,
    options: Options,
    completions_tx: Sender<Completion>,
    completions_rx: Receiver<Completion>,
    current: Option<SceneSession>,
    next_session: u64,
    events: Option<EventFn>,
    status: SessionStatus,
    last_error: Option<PanoError>,
}

impl SessionManager {
    /// Manager for one drawing surface.
    pub fn new(
        engine: Box<dyn RenderEngine>,
        loader: Box<dyn PanoramaLoader>,
        lock: Box<dyn PointerLock>,
        surface: SurfaceId,
        options: Options,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            engine,
            loader,
            lock,
            surface,
            options,
            completions_tx,
            completions_rx,
            current: None,
            next_session: 0,
            events: None,
            status: SessionStatus::Idle,
            last_error: None,
        }
    }

    /// Install the host's status/notice callback.
    pub fn set_event_handler(&mut self, events: EventFn) {
        self.events = Some(events);
    }

    /// Current session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The most recent session failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&PanoError> {
        self.last_error.as_ref()
    }

    /// The options the next session will be built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current camera pose, when a session exists.
    #[must_use]
    pub fn camera_state(&self) -> Option<CameraState> {
        let shared = self.current_shared()?;
        let st = shared.state.lock().ok()?;
        Some(st.camera.state())
    }

    /// Current pointer-lock state, when a session exists.
    #[must_use]
    pub fn lock_state(&self) -> Option<LockState> {
        let shared = self.current_shared()?;
        let st = shared.state.lock().ok()?;
        Some(st.router.lock_state())
    }

    /// Start a session for `image`, replacing any current session.
    ///
    /// The previous session is fully disposed before any work for the
    /// new one begins, so at most one frame loop and one set of input
    /// listeners are ever active for this surface. Returns immediately;
    /// readiness or failure is reported through the event callback once
    /// [`pump`](Self::pump) applies the completions.
    pub fn start_session(&mut self, image: ImageRef) -> SessionId {
        self.dispose();

        let id = SessionId(self.next_session);
        self.next_session += 1;

        let shared = Arc::new(FrameShared {
            alive: AtomicBool::new(true),
            state: Mutex::new(FrameState {
                router: InputRouter::new(&self.options.input),
                camera: OrbitCameraController::new(&self.options.camera),
            }),
        });
        self.current = Some(SceneSession {
            id,
            engine: None,
            asset: None,
            loop_running: false,
            shared,
        });
        self.set_status(SessionStatus::Loading);
        log::info!("starting panorama session {id:?} for {image}");

        let tx = self.completions_tx.clone();
        self.engine.create(
            self.surface,
            Box::new(move |result| {
                let _ = tx.send(Completion::Engine {
                    session: id,
                    result,
                });
            }),
        );
        let tx = self.completions_tx.clone();
        self.loader.load(
            &image,
            Box::new(move |result| {
                let _ = tx.send(Completion::Asset {
                    session: id,
                    result,
                });
            }),
        );
        id
    }

    /// Apply acquisition completions delivered since the last call.
    ///
    /// Completions for replaced or disposed sessions are discarded here;
    /// an engine instance that finished creating for a dead session is
    /// released immediately.
    pub fn pump(&mut self) {
        while let Ok(done) = self.completions_rx.try_recv() {
            match done {
                Completion::Engine { session, result } => {
                    self.apply_engine(session, result);
                }
                Completion::Asset { session, result } => {
                    self.apply_asset(session, result);
                }
            }
        }
    }

    /// Dispose the current session. Idempotent; never panics.
    ///
    /// Marks the session dead (so in-flight acquisitions and the frame
    /// callback become no-ops), stops the frame loop, detaches buffered
    /// input, releases the engine, and exits pointer lock if held. A
    /// prior `Error` status is only cleared by the next
    /// [`start_session`](Self::start_session).
    pub fn dispose(&mut self) {
        if self.teardown_current() {
            self.set_status(SessionStatus::Idle);
        }
    }

    /// Route a platform input event, stamping motion with the current
    /// time.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.handle_input_at(event, Instant::now());
    }

    /// Route a platform input event with an explicit motion timestamp.
    pub fn handle_input_at(&mut self, event: InputEvent, now: Instant) {
        let Some(shared) = self.current_shared() else {
            return;
        };
        // Input after disposal means the host failed to detach its
        // listeners; the lifecycle rules make this unobservable.
        debug_assert!(
            shared.alive.load(Ordering::SeqCst),
            "input delivered to a disposed session"
        );
        match event {
            InputEvent::PointerMoved { dx, dy, mode } => {
                if let Ok(mut st) = shared.state.lock() {
                    let _ = st.router.push_move(dx, dy, mode, now);
                }
            }
            InputEvent::SurfaceClicked => {
                let request = shared
                    .state
                    .lock()
                    .is_ok_and(|mut st| st.router.surface_clicked());
                if request {
                    self.lock.request_lock(self.surface);
                }
            }
            InputEvent::LockChanged { locked } => {
                if let Ok(mut st) = shared.state.lock() {
                    st.router.lock_changed(locked);
                    if locked {
                        // The retained smoothing delta belongs to the
                        // previous interaction episode.
                        st.camera.reset_smoothing();
                    }
                }
                self.notify(SessionEvent::Notice(if locked {
                    Notice::FreeLookEntered
                } else {
                    Notice::FreeLookExited
                }));
            }
            InputEvent::LockDenied => {
                if let Ok(mut st) = shared.state.lock() {
                    st.router.lock_denied();
                }
                log::warn!(
                    "pointer lock denied; surface stays interactive via touch"
                );
                self.notify(SessionEvent::Notice(Notice::LockUnavailable));
            }
        }
    }

    /// Leave free-look mode programmatically.
    pub fn exit_free_look(&mut self) {
        let Some(shared) = self.current_shared() else {
            return;
        };
        let should_exit = shared
            .state
            .lock()
            .is_ok_and(|mut st| st.router.begin_exit());
        if should_exit {
            self.lock.exit_lock();
        }
    }

    /// Forward a drawing-surface size change to the engine.
    pub fn handle_resize(&mut self) {
        if let Some(engine) = self.current.as_ref().and_then(|s| s.engine) {
            self.engine.resize(engine);
        }
    }

    /// Fullscreen transitions piggyback on pointer lock: entering
    /// fullscreen requests the lock, leaving it releases the lock.
    pub fn handle_fullscreen_changed(&mut self, fullscreen: bool) {
        if fullscreen {
            let Some(shared) = self.current_shared() else {
                return;
            };
            let request = shared
                .state
                .lock()
                .is_ok_and(|mut st| st.router.surface_clicked());
            if request {
                self.lock.request_lock(self.surface);
            }
        } else {
            self.exit_free_look();
        }
    }

    // ── internals ────────────────────────────────────────────────────────

    fn current_shared(&self) -> Option<Arc<FrameShared>> {
        self.current.as_ref().map(|s| Arc::clone(&s.shared))
    }

    fn is_current_live(&self, session: SessionId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|s| {
                s.id == session && s.shared.alive.load(Ordering::SeqCst)
            })
    }

    fn apply_engine(
        &mut self,
        session: SessionId,
        result: Result<EngineId, String>,
    ) {
        if !self.is_current_live(session) {
            if let Ok(engine) = result {
                log::debug!(
                    "engine {engine:?} completed for stale session \
                     {session:?}; releasing"
                );
                self.engine.dispose(engine);
            }
            return;
        }
        match result {
            Ok(engine) => {
                if let Some(s) = self.current.as_mut() {
                    s.engine = Some(engine);
                }
                log::debug!("engine {engine:?} ready for {session:?}");
                self.try_start_loop();
            }
            Err(reason) => {
                self.fail(PanoError::UnsupportedEnvironment(reason));
            }
        }
    }

    fn apply_asset(
        &mut self,
        session: SessionId,
        result: Result<AssetId, String>,
    ) {
        if !self.is_current_live(session) {
            if let Ok(asset) = result {
                log::debug!(
                    "asset {asset:?} completed for stale session \
                     {session:?}; discarding"
                );
            }
            return;
        }
        match result {
            Ok(asset) => {
                if let Some(s) = self.current.as_mut() {
                    s.asset = Some(asset);
                }
                log::debug!("panorama {asset:?} ready for {session:?}");
                self.try_start_loop();
            }
            Err(reason) => self.fail(PanoError::AssetLoad(reason)),
        }
    }

    /// Start the frame loop once both engine and asset are ready.
    fn try_start_loop(&mut self) {
        let (engine, shared) = {
            let Some(s) = self.current.as_mut() else {
                return;
            };
            if s.loop_running || s.asset.is_none() {
                return;
            }
            let Some(engine) = s.engine else {
                return;
            };
            s.loop_running = true;
            (engine, Arc::clone(&s.shared))
        };
        let frame: FrameFn = Box::new(move || frame_tick(&shared));
        self.engine.run_loop(engine, frame);
        log::info!("frame loop started on engine {engine:?}");
        self.set_status(SessionStatus::Ready);
        self.notify(SessionEvent::Notice(Notice::EnterFreeLookHint));
    }

    /// Tear down the current session, if any. Returns whether one
    /// existed. The `alive` flag is flipped before anything is released,
    /// so every code path that might still run observes a dead session.
    fn teardown_current(&mut self) -> bool {
        let Some(session) = self.current.take() else {
            return false;
        };
        session.shared.alive.store(false, Ordering::SeqCst);
        let lock_engaged = match session.shared.state.lock() {
            Ok(mut st) => {
                st.router.clear();
                st.router.lock_engaged()
            }
            Err(_) => false,
        };
        if let Some(engine) = session.engine {
            if session.loop_running {
                self.engine.stop_loop(engine);
            }
            self.engine.dispose(engine);
        }
        if lock_engaged {
            self.lock.exit_lock();
        }
        log::info!("panorama session {:?} disposed", session.id);
        true
    }

    /// Recoverable acquisition failure: tear down whatever was acquired
    /// and surface the error. The host may retry `start_session`.
    fn fail(&mut self, err: PanoError) {
        log::warn!("panorama session failed: {err}");
        let _ = self.teardown_current();
        self.last_error = Some(err);
        self.set_status(SessionStatus::Error);
    }

    fn set_status(&mut self, status: SessionStatus) {
        if self.status != status {
            self.status = status;
            log::debug!("session status -> {status:?}");
            self.notify(SessionEvent::Status(status));
        }
    }

    fn notify(&mut self, event: SessionEvent) {
        if let Some(cb) = self.events.as_mut() {
            cb(event);
        }
    }
}
