//! Append-only notification log
//!
//! Each budget notification is written as a single line containing a local
//! timestamp and the message. The file is created on first append and never
//! truncated.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::error::{FintrackError, FintrackResult};

/// Timestamp format for log lines (ISO-8601 style, local time)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Handles appending notification messages to the log file
///
/// Cloning yields another handle on the same file; the file itself is
/// opened per operation, so clones never race on a shared descriptor.
#[derive(Clone)]
pub struct NotificationLog {
    path: PathBuf,
}

impl NotificationLog {
    /// Create a new notification log that writes to the specified path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append a message as a single `[timestamp] message` line
    ///
    /// Each write is flushed immediately so a crash cannot drop a warning
    /// that was already reported to the user.
    pub fn append(&self, message: &str) -> FintrackResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FintrackError::Io(format!("Failed to open notification log: {}", e)))?;

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(file, "[{}] {}", timestamp, message)
            .map_err(|e| FintrackError::Io(format!("Failed to write notification: {}", e)))?;

        file.flush()
            .map_err(|e| FintrackError::Io(format!("Failed to flush notification log: {}", e)))?;

        Ok(())
    }

    /// Read all logged lines in chronological order (oldest first)
    pub fn read_all(&self) -> FintrackResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| FintrackError::Io(format!("Failed to open notification log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();

        for line in reader.lines() {
            let line = line
                .map_err(|e| FintrackError::Io(format!("Failed to read notification log: {}", e)))?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }

        Ok(lines)
    }
}
