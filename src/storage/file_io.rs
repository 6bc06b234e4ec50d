//! JSON file primitives shared by the stores
//!
//! Reads tolerate a file that does not exist yet; writes go through a
//! sibling temp file and a rename so a crash mid-write leaves the previous
//! contents intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FintrackError;

/// Deserialize a JSON file, falling back to `T::default()` when the file
/// is absent
///
/// Absence is the normal first-run state. A file that is present but
/// unreadable or malformed is reported as a storage error so the caller can
/// decide whether to degrade.
pub fn read_json<T, P>(path: P) -> Result<T, FintrackError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| FintrackError::Storage(format!("cannot open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| FintrackError::Storage(format!("cannot parse {}: {}", path.display(), e)))
}

/// Serialize `data` as pretty JSON, replacing the file atomically
///
/// The payload is written to a `.json.tmp` sibling, synced, and renamed over
/// the destination. Missing parent directories are created first.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FintrackError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FintrackError::Storage(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }

    // Rename is only atomic within a filesystem, so the temp file sits next
    // to the destination.
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        FintrackError::Storage(format!("cannot create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FintrackError::Storage(format!("cannot serialize payload: {}", e)))?;

    writer.flush().map_err(|e| {
        FintrackError::Storage(format!("cannot flush {}: {}", temp_path.display(), e))
    })?;

    writer.get_ref().sync_all().map_err(|e| {
        FintrackError::Storage(format!("cannot sync {}: {}", temp_path.display(), e))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::Storage(format!("cannot replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
