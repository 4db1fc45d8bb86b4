//! Path management for fintrack
//!
//! The ledger file location is an explicit value handed to `Ledger::open`.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit file (`--file` flag or `FINTRACK_DATA_FILE`)
//! 2. `FINTRACK_DATA_DIR` environment variable + `financial_data.json`
//! 3. The platform config directory (`~/.config/fintrack` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Default name of the ledger document
pub const DEFAULT_DATA_FILE: &str = "financial_data.json";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages the paths used by fintrack
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths, preferring an explicit data file when given
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit location is given and the platform
    /// config directory cannot be determined.
    pub fn resolve(explicit_file: Option<PathBuf>) -> Result<Self, TrackerError> {
        if let Some(file) = explicit_file {
            return Ok(Self::with_data_file(file));
        }

        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_dir()?
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Use `financial_data.json` inside a custom directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            data_file: base_dir.join(DEFAULT_DATA_FILE),
        }
    }

    /// Use an explicit data file
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Path of the ledger document
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory holding the data file (and the settings file)
    pub fn base_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Path of the settings file, next to the data file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir().join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(self.base_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_dir() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "fintrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))
}
