//! Path management for fintrack
//!
//! Resolves where the data directory lives and which files back each store.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. `./data` relative to the current working directory

use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

/// Default data directory, relative to the working directory
const DEFAULT_DATA_DIR: &str = "data";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Directory holding all persisted state
    data_dir: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance
    ///
    /// Path resolution:
    /// 1. `FINTRACK_DATA_DIR` env var (explicit override)
    /// 2. `./data`
    pub fn new() -> Self {
        let data_dir = match std::env::var("FINTRACK_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Self { data_dir }
    }

    /// Create DataPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir.join("transactions.json")
    }

    /// Get the path to budget.txt
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir.join("budget.txt")
    }

    /// Get the path to notifications.log
    pub fn notifications_file(&self) -> PathBuf {
        self.data_dir.join("notifications.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> FintrackResult<()> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_data_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.data_dir(), temp_dir.path());
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("transactions.json")
        );
        assert_eq!(paths.budget_file(), temp_dir.path().join("budget.txt"));
        assert_eq!(
            paths.notifications_file(),
            temp_dir.path().join("notifications.log")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_data_dir(temp_dir.path().join("nested").join("data"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_ensure_directories_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_data_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();
        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
