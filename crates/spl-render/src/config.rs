//! Presentation settings loaded from an optional JSON file.
//!
//! Every field has a default, so a partial file only overrides what it
//! names and a missing or broken file falls back to the defaults entirely.

use serde::{Deserialize, Serialize};
use spl_core::constants::{DEFAULT_CURVE_MAX_DELTA_DB, DEFAULT_CURVE_SAMPLES};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Input line shown when the window opens.
pub const DEFAULT_INPUT: &str = "90,85,88";

/// Decimal places used for ΔL, L+ and combined levels in reports.
pub const DEFAULT_DECIMALS: usize = 2;

/// Complete presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial contents of the input line
    pub default_input: String,
    /// Decimal places in step and result lines
    pub decimals: usize,
    pub curve: CurveConfig,
    pub window: WindowConfig,
}

/// Sampling of the correction-term chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Number of evenly spaced points
    pub samples: usize,
    /// Upper end of the ΔL axis in dB
    pub max_delta_db: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_CURVE_SAMPLES,
            max_delta_db: DEFAULT_CURVE_MAX_DELTA_DB,
        }
    }
}

/// Initial window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_input: DEFAULT_INPUT.to_owned(),
            decimals: DEFAULT_DECIMALS,
            curve: CurveConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// Unreadable files and invalid JSON are logged and replaced by
    /// [`AppConfig::default`]; this never fails.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        %err,
                        "failed to parse configuration, using defaults"
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "failed to read configuration, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Load from `path` when one is given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        path.map(Self::load_from_file).unwrap_or_default()
    }
}
