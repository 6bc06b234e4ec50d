//! Budget notification bus
//!
//! A minimal publish/subscribe mechanism. Subscribers implement the
//! `BudgetObserver` trait; the ledger is the sole publisher. A failing
//! observer is logged and skipped so it cannot block delivery to the rest.

use tracing::warn;

use crate::error::FintrackResult;
use crate::storage::NotificationLog;

/// Capability interface for budget-warning subscribers
pub trait BudgetObserver {
    /// Called with the warning message when the budget threshold is crossed
    fn update(&self, message: &str) -> FintrackResult<()>;
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered collection of subscribed observers
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn BudgetObserver>)>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; delivery follows subscription order
    pub fn subscribe(&mut self, observer: Box<dyn BudgetObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously registered observer
    ///
    /// Returns false when the handle is unknown (already removed).
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() < before
    }

    /// Number of currently subscribed observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are subscribed
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver a message to every observer, in subscription order
    ///
    /// An observer returning an error does not prevent delivery to the
    /// observers after it; the failure is logged and delivery continues.
    pub fn publish(&self, message: &str) {
        for (id, observer) in &self.observers {
            if let Err(e) = observer.update(message) {
                warn!("observer {:?} failed to handle notification: {}", id, e);
            }
        }
    }
}

/// Observer that records every warning in the append-only notification log
pub struct NotificationLogger {
    log: NotificationLog,
}

impl NotificationLogger {
    /// Create a logger writing through the given notification log
    pub fn new(log: NotificationLog) -> Self {
        Self { log }
    }
}

impl BudgetObserver for NotificationLogger {
    fn update(&self, message: &str) -> FintrackResult<()> {
        self.log.append(message)
    }
}
