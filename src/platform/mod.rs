//! Capability traits for the platform collaborators the session core drives.
//!
//! The crate never talks to a concrete graphics API or DOM. It consumes
//! three abstract capabilities — a render engine, a panorama loader, and a
//! pointer-lock facility — through the traits below, all driven from the
//! host's main thread.
//!
//! Engine creation and asset loading are the only asynchronous operations
//! in the system: both report completion through a `FnOnce` callback that
//! the platform may invoke during the call or at any later point. The
//! [`SessionManager`](crate::session::SessionManager) applies completions
//! on the host thread when its `pump` method runs, so implementations are
//! free to call back from timers, fetch handlers, or immediately.

use crate::camera::CameraState;

/// Opaque identifier of the drawing surface a session renders to.
///
/// Minted by the host (e.g. one per canvas element); the core only passes
/// it through to [`RenderEngine::create`] and [`PointerLock::request_lock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// Opaque handle to a live render-engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineId(pub u64);

/// Opaque handle to a decoded panorama asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub u64);

/// Reference to a panoramic image (URL or asset path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap an image URL or path.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The underlying URL/path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Completion callback for [`RenderEngine::create`].
///
/// `Err` carries a platform reason string; the session manager surfaces it
/// as [`PanoError::UnsupportedEnvironment`](crate::PanoError::UnsupportedEnvironment).
pub type EngineCreated = Box<dyn FnOnce(Result<EngineId, String>)>;

/// Completion callback for [`PanoramaLoader::load`].
///
/// `Err` carries a fetch/decode reason string; the session manager surfaces
/// it as [`PanoError::AssetLoad`](crate::PanoError::AssetLoad).
pub type AssetLoaded = Box<dyn FnOnce(Result<AssetId, String>)>;

/// Per-frame callback installed by [`RenderEngine::run_loop`].
///
/// The engine invokes it once per animation frame and renders the panorama
/// with the returned camera pose. `None` signals that the owning session
/// has been disposed: the engine must stop invoking the callback and may
/// drop it.
pub type FrameFn = Box<dyn FnMut() -> Option<CameraState>>;

/// A render context factory bound to drawing surfaces.
///
/// Implementations own the actual graphics resources; the session core
/// only sequences their lifetime. All methods are called from the host's
/// main thread.
pub trait RenderEngine {
    /// Begin creating a render context bound to `surface`.
    ///
    /// Completion is reported through `done`, possibly after this call
    /// returns. A `done(Err(..))` means the environment cannot render
    /// (missing graphics capability) — the session becomes recoverable
    /// `Error`, never a panic.
    fn create(&mut self, surface: SurfaceId, done: EngineCreated);

    /// Release an engine instance and everything it owns (scene, dome,
    /// GPU context). Must tolerate an already-stopped frame loop.
    fn dispose(&mut self, engine: EngineId);

    /// Start the per-frame loop for `engine`, driving `frame` once per
    /// animation frame until it returns `None`.
    fn run_loop(&mut self, engine: EngineId, frame: FrameFn);

    /// Stop the per-frame loop, if running. Idempotent.
    fn stop_loop(&mut self, engine: EngineId);

    /// Propagate a drawing-surface size change to the engine.
    fn resize(&mut self, engine: EngineId);
}

/// Produces spherical-projection scene assets from image references.
pub trait PanoramaLoader {
    /// Begin fetching and decoding `image` into a panorama dome asset.
    ///
    /// Completion is reported through `done`, possibly after this call
    /// returns. The returned [`AssetId`] stays owned by the loader and is
    /// released together with the engine instance it was attached to.
    fn load(&mut self, image: &ImageRef, done: AssetLoaded);
}

/// Platform pointer-lock capability.
///
/// Grant, denial, and release are *not* reported through return values:
/// they arrive asynchronously as
/// [`InputEvent::LockChanged`](crate::input::InputEvent::LockChanged) and
/// [`InputEvent::LockDenied`](crate::input::InputEvent::LockDenied), which
/// the host forwards from the platform's lock-change notifications.
pub trait PointerLock {
    /// Request pointer lock on the given surface.
    fn request_lock(&mut self, surface: SurfaceId);

    /// Release the pointer lock, if held. Harmless when not locked.
    fn exit_lock(&mut self);
}
