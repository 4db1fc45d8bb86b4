//! File I/O utilities with atomic writes
//!
//! Reads are lenient: a missing, empty or corrupt file yields the default
//! value instead of an error. Writes go through a temp file and a rename so
//! a crash never leaves a half-written document behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Outcome of a lenient read, so callers can log what happened
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// File parsed successfully
    Loaded(T),
    /// File absent or empty
    Missing,
    /// File present but unreadable or unparseable
    Corrupt(String),
}

/// Read JSON from a file without ever failing
pub fn read_json_lenient<T, P>(path: P) -> LoadOutcome<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return LoadOutcome::Missing;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return LoadOutcome::Corrupt(format!("Failed to read {}: {}", path.display(), e))
        }
    };

    if contents.trim().is_empty() {
        return LoadOutcome::Missing;
    }

    match serde_json::from_str(&contents) {
        Ok(value) => LoadOutcome::Loaded(value),
        Err(e) => LoadOutcome::Corrupt(format!("Failed to parse {}: {}", path.display(), e)),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let result = write_and_sync(file, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| TrackerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync<T: Serialize>(file: File, data: &T) -> Result<(), TrackerError> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))
}
