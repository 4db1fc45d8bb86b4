//! User settings for fintrack
//!
//! Manages display and date preferences. Missing fields fall back to their
//! defaults so older settings files keep loading.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::storage::write_json_atomic;

/// Which calendar supplies "today" when an expense has no date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateClock {
    /// UTC calendar date (default, deterministic across time zones)
    #[default]
    Utc,
    /// The machine's local calendar date
    Local,
}

impl DateClock {
    /// Current calendar date according to this clock
    pub fn today(&self) -> NaiveDate {
        match self {
            DateClock::Utc => Utc::now().date_naive(),
            DateClock::Local => Local::now().date_naive(),
        }
    }
}

/// Preferred export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Clock used for undated expenses
    #[serde(default)]
    pub date_clock: DateClock,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_clock: DateClock::default(),
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
