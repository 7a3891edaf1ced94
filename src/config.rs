use std::fs;
use std::path::{Path, PathBuf};

use hydrolab::{PressureSnapshot, DEFAULT_PRESSURE, GAUGE_MAX, SNAPSHOT_STEP};
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a settings file cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Returned when the file cannot be read.
    #[error("cannot read settings from {path:?}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the file is not valid settings JSON.
    #[error("invalid settings in {path:?}: {source}")]
    Parse {
        /// File that was requested.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Settings of the lab front end. Missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabSettings {
    /// Pressure drawn before anything is solved, in pascals.
    pub default_pressure: f64,
    /// Granularity of stored pressures, in pascals.
    pub snapshot_step: f64,
    /// Largest pressure the slider can hold, in pascals.
    pub max_pressure: f64,
    /// Print JSON instead of a text report.
    pub emit_json: bool,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            default_pressure: DEFAULT_PRESSURE,
            snapshot_step: SNAPSHOT_STEP,
            max_pressure: GAUGE_MAX,
            emit_json: false,
        }
    }
}

impl LabSettings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Snapshot shown before anything is solved.
    pub fn initial_snapshot(&self) -> PressureSnapshot {
        PressureSnapshot::new(self.default_pressure)
    }

    /// Store `pressure` the way the slider would hold it.
    pub fn snapshot(&self, pressure: f64) -> PressureSnapshot {
        PressureSnapshot::quantized(pressure, self.snapshot_step, self.max_pressure)
    }
}
