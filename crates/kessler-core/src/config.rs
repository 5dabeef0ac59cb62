//! Simulation configuration.
//!
//! Everything the host decides before the first entity is spawned: the
//! window the playfield is carved from, the default boundary response and the
//! RNG seed. Loadable from JSON; every field has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use crate::enums::BoundaryMode;
use crate::geometry::Playfield;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `SimConfig`.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// Borders leave no room to move.
    #[error("playfield has no area ({width} x {height})")]
    Degenerate { width: f64, height: f64 },
}

/// Margins inside the window that bodies may not enter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Borders {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Playfield definition handed to `Registry::configure`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Host window width (pixels).
    pub width: f64,
    /// Host window height (pixels).
    pub height: f64,
    /// Boundary response for bodies spawned without an override.
    pub default_boundary: BoundaryMode,
    pub borders: Borders,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            default_boundary: BoundaryMode::default(),
            borders: Borders::default(),
        }
    }
}

impl FieldSettings {
    pub fn new(width: f64, height: f64, default_boundary: BoundaryMode) -> Self {
        Self {
            width,
            height,
            default_boundary,
            borders: Borders::default(),
        }
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// The playfield these settings describe.
    pub fn playfield(&self) -> Result<Playfield, ConfigError> {
        Playfield::from_window(self.width, self.height, &self.borders)
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub field: FieldSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldSettings::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
