//! Crate-level error types.

use std::fmt;

/// Errors produced by the panotour crate.
///
/// Both session-level failures ([`UnsupportedEnvironment`](Self::UnsupportedEnvironment)
/// and [`AssetLoad`](Self::AssetLoad)) are recoverable: the host may retry
/// `start_session` with the same or a different image reference. Nothing in
/// this crate terminates the hosting application.
#[derive(Debug)]
pub enum PanoError {
    /// The platform cannot create a render engine for the drawing surface
    /// (e.g. missing graphics capability).
    UnsupportedEnvironment(String),
    /// The panorama image failed to fetch or decode.
    AssetLoad(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for PanoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedEnvironment(msg) => {
                write!(f, "unsupported environment: {msg}")
            }
            Self::AssetLoad(msg) => {
                write!(f, "panorama load error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PanoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PanoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
