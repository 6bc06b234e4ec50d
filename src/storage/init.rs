//! Storage initialization
//!
//! Handles first-run setup: creates the data directory and seeds the three
//! backing files with their defaults. Safe to call on every start; files that
//! already exist are left untouched.

use std::fs;

use crate::config::DataPaths;
use crate::error::{FintrackError, FintrackResult};

use super::{BudgetStore, DEFAULT_MONTHLY_BUDGET};

/// Initialize storage for a fresh installation
///
/// Seeds transactions.json with an empty array, budget.txt with the default
/// budget, and notifications.log as an empty file. Idempotent.
pub fn initialize_storage(paths: &DataPaths) -> FintrackResult<()> {
    paths.ensure_directories()?;

    if !paths.transactions_file().exists() {
        fs::write(paths.transactions_file(), "[]")
            .map_err(|e| FintrackError::Storage(format!("Failed to seed transactions: {}", e)))?;
    }

    if !paths.budget_file().exists() {
        BudgetStore::new(paths.budget_file()).save(DEFAULT_MONTHLY_BUDGET)?;
    }

    if !paths.notifications_file().exists() {
        fs::write(paths.notifications_file(), "")
            .map_err(|e| FintrackError::Storage(format!("Failed to seed notification log: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_seeds_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_data_dir(temp_dir.path().join("data"));

        initialize_storage(&paths).unwrap();

        assert_eq!(
            std::fs::read_to_string(paths.transactions_file()).unwrap(),
            "[]"
        );
        assert_eq!(
            std::fs::read_to_string(paths.budget_file()).unwrap(),
            "2000000"
        );
        assert_eq!(
            std::fs::read_to_string(paths.notifications_file()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_second_run_leaves_existing_files_alone() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_data_dir(temp_dir.path().join("data"));

        initialize_storage(&paths).unwrap();

        std::fs::write(paths.budget_file(), "750000").unwrap();
        std::fs::write(paths.notifications_file(), "[ts] old warning\n").unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(
            std::fs::read_to_string(paths.budget_file()).unwrap(),
            "750000"
        );
        assert_eq!(
            std::fs::read_to_string(paths.notifications_file()).unwrap(),
            "[ts] old warning\n"
        );
    }
}
