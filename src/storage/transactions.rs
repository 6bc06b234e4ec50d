//! Transaction store for JSON persistence
//!
//! Serializes the full ordered transaction sequence to transactions.json as a
//! JSON array. An empty ledger serializes as `[]`.

use std::path::PathBuf;

use crate::error::FintrackResult;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Store for the ordered transaction sequence
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a new transaction store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Save the full ordered sequence, replacing the previous contents
    pub fn save(&self, transactions: &[Transaction]) -> FintrackResult<()> {
        write_json_atomic(&self.path, &transactions)
    }

    /// Load the full sequence in stored order
    ///
    /// A missing file yields an empty sequence. A corrupt file is reported as
    /// a storage error; the caller decides how to degrade.
    pub fn load(&self) -> FintrackResult<Vec<Transaction>> {
        read_json(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample(desc: &str, amount: f64, day: u32) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            desc,
            amount,
            TransactionType::Expense,
            Category::Food,
        )
        .unwrap()
    }

    #[test]
    fn test_load_missing_file_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = TransactionStore::new(temp_dir.path().join("transactions.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = TransactionStore::new(temp_dir.path().join("transactions.json"));

        let txns = vec![sample("Third", 30.0, 3), sample("First", 10.0, 1)];
        store.save(&txns).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, txns[0].id);
        assert_eq!(loaded[0].description, "Third");
        assert_eq!(loaded[1].date, txns[1].date);
        assert_eq!(loaded[1].amount, 10.0);
    }

    #[test]
    fn test_empty_ledger_serializes_as_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = TransactionStore::new(path.clone());

        store.save(&[]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(&path, "not an array").unwrap();

        let store = TransactionStore::new(path);
        assert!(store.load().is_err());
    }
}
