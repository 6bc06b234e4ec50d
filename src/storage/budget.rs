//! Monthly budget persistence
//!
//! The budget is stored as a single decimal number in plain text, no
//! surrounding structure.

use std::fs;
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

/// Store for the monthly budget value
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a new budget store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Save the budget, replacing the previous value
    pub fn save(&self, amount: f64) -> FintrackResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FintrackError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&self.path, format!("{}", amount)).map_err(|e| {
            FintrackError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// Load the stored budget
    ///
    /// A missing file, unreadable file, or unparsable content yields `None`;
    /// the caller substitutes its default.
    pub fn load(&self) -> Option<f64> {
        let text = fs::read_to_string(&self.path).ok()?;
        text.trim().parse::<f64>().ok()
    }
}
