//! Persistence layer for fintrack
//!
//! Three independent stores, each with its own backing file and failure
//! domain: the transaction sequence (JSON array), the monthly budget (plain
//! decimal text), and the append-only notification log. All operations
//! return explicit results at this boundary; callers decide how to degrade.

pub mod budget;
pub mod file_io;
pub mod init;
pub mod notifications;
pub mod transactions;

pub use budget::BudgetStore;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use notifications::NotificationLog;
pub use transactions::TransactionStore;

use crate::config::DataPaths;
use crate::error::FintrackResult;

/// Monthly budget seeded on first run and substituted when budget.txt is
/// absent or unreadable (Rp 2,000,000)
pub const DEFAULT_MONTHLY_BUDGET: f64 = 2_000_000.0;

/// Coordinator that provides access to all stores
pub struct Storage {
    paths: DataPaths,
    pub transactions: TransactionStore,
    pub budget: BudgetStore,
    pub notifications: NotificationLog,
}

impl Storage {
    /// Create a new Storage instance, initializing files on first run
    pub fn new(paths: DataPaths) -> FintrackResult<Self> {
        initialize_storage(&paths)?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            budget: BudgetStore::new(paths.budget_file()),
            notifications: NotificationLog::new(paths.notifications_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }
}
