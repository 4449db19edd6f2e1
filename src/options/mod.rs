//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera sensitivities and limits, input rate
//! limiting) are consolidated here. Options serialize to/from TOML so a
//! host can ship per-deployment presets.

mod camera;
mod input;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PanoError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit-camera sensitivity and limit parameters.
    pub camera: CameraOptions,
    /// Input sampling parameters.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PanoError::Io`] when the file cannot be read and
    /// [`PanoError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, PanoError> {
        let content = std::fs::read_to_string(path).map_err(PanoError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PanoError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PanoError::OptionsParse`] on serialization failure and
    /// [`PanoError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PanoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PanoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PanoError::Io)?;
        }
        std::fs::write(path, content).map_err(PanoError::Io)
    }
}
