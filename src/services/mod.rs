//! Business logic layer
//!
//! The ledger service owns the in-memory transaction sequence and the budget
//! monitor; the observer module provides the notification bus it publishes
//! through.

pub mod ledger;
pub mod observer;

pub use ledger::Ledger;
pub use observer::{BudgetObserver, NotificationLogger, ObserverId, ObserverRegistry};
