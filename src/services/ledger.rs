//! Ledger service
//!
//! In-memory ordered collection of transactions backed by the storage layer.
//! Every mutation persists the full sequence and re-checks the monthly budget
//! threshold. Persistence failures are logged and swallowed so the in-memory
//! model keeps working even when the disk does not; a crash right after a
//! failed save loses the most recent mutation.

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, Transaction, TransactionId};
use crate::reports::format::format_rupiah;
use crate::storage::{Storage, DEFAULT_MONTHLY_BUDGET};

use super::observer::{BudgetObserver, ObserverId, ObserverRegistry};

/// Budget monitor state
///
/// One warning is published per upward crossing of 100%; the state resets
/// silently once spending drops back below the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BudgetState {
    BelowThreshold,
    Notified,
}

/// The ledger: transaction store, budget monitor, and notification publisher
///
/// One logical ledger is active per process by caller convention; the struct
/// itself is an ordinary owned component. Mutating operations take `&mut
/// self`, which is how the "external synchronization required" contract is
/// expressed here.
pub struct Ledger {
    storage: Storage,
    transactions: Vec<Transaction>,
    monthly_budget: f64,
    budget_state: BudgetState,
    observers: ObserverRegistry,
}

impl Ledger {
    /// Construct a ledger from storage, loading persisted state
    ///
    /// A missing or corrupt transactions file yields an empty ledger; a
    /// missing or unreadable budget file yields the default budget. Neither
    /// is a hard failure.
    pub fn new(storage: Storage) -> Self {
        let transactions = storage.transactions.load().unwrap_or_else(|e| {
            warn!("failed to load transactions, starting empty: {}", e);
            Vec::new()
        });

        let monthly_budget = storage.budget.load().unwrap_or(DEFAULT_MONTHLY_BUDGET);

        Self {
            storage,
            transactions,
            monthly_budget,
            budget_state: BudgetState::BelowThreshold,
            observers: ObserverRegistry::new(),
        }
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Append a transaction, persist the full sequence, re-check the budget
    ///
    /// No content-uniqueness check is performed; two transactions with equal
    /// content but different identifiers are distinct entries.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
        self.persist_transactions();
        self.check_budget_status();
    }

    /// Remove the transaction with the given id, persist, re-check the budget
    ///
    /// Deleting an unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: &TransactionId) {
        self.transactions.retain(|tx| tx.id != *id);
        self.persist_transactions();
        self.check_budget_status();
    }

    /// Defensive copy of the full sequence, in insertion order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Filter by optional category and inclusive date bounds
    ///
    /// Each absent parameter places no constraint on its axis. Result order
    /// matches ledger order. Pure query, no side effects.
    pub fn filter(
        &self,
        category: Option<Category>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| category.map_or(true, |c| tx.category == c))
            .filter(|tx| start_date.map_or(true, |d| tx.date >= d))
            .filter(|tx| end_date.map_or(true, |d| tx.date <= d))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Budget
    // ------------------------------------------------------------------

    /// Get the monthly budget
    pub fn budget(&self) -> f64 {
        self.monthly_budget
    }

    /// Replace the monthly budget, persist it, re-check the threshold
    ///
    /// # Errors
    ///
    /// A negative amount is rejected with a validation error and the budget
    /// is left unchanged.
    pub fn set_budget(&mut self, amount: f64) -> FintrackResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FintrackError::validation("Budget must not be negative"));
        }

        self.monthly_budget = amount;

        if let Err(e) = self.storage.budget.save(amount) {
            warn!("failed to persist budget: {}", e);
        }

        self.check_budget_status();
        Ok(())
    }

    /// Total expense amount for the calendar month and year of today
    ///
    /// Recomputed from the in-memory sequence on every call.
    pub fn current_month_spending(&self) -> f64 {
        self.current_month_spending_on(Local::now().date_naive())
    }

    /// Total expense amount for the calendar month and year of `date`
    pub fn current_month_spending_on(&self, date: NaiveDate) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.is_expense())
            .filter(|tx| tx.date.month() == date.month() && tx.date.year() == date.year())
            .map(|tx| tx.amount)
            .sum()
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Subscribe an observer to budget warnings
    pub fn subscribe(&mut self, observer: Box<dyn BudgetObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously subscribed observer
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn persist_transactions(&self) {
        if let Err(e) = self.storage.transactions.save(&self.transactions) {
            warn!("failed to persist transactions: {}", e);
        }
    }

    /// Re-check the budget threshold after a mutation or budget change
    ///
    /// Runs synchronously; never scheduled on its own. With a zero budget the
    /// monitor is forced below threshold and nothing fires.
    fn check_budget_status(&mut self) {
        if self.monthly_budget <= 0.0 {
            self.budget_state = BudgetState::BelowThreshold;
            return;
        }

        let spending = self.current_month_spending();
        let percentage = spending / self.monthly_budget * 100.0;

        if percentage >= 100.0 {
            if self.budget_state == BudgetState::BelowThreshold {
                let message = format!(
                    "BUDGET WARNING: spent {} of {} this month",
                    format_rupiah(spending),
                    format_rupiah(self.monthly_budget)
                );
                self.observers.publish(&message);
                self.budget_state = BudgetState::Notified;
            }
        } else {
            // Silent reset once spending drops back below the budget, e.g.
            // after a deletion or a raised budget.
            self.budget_state = BudgetState::BelowThreshold;
        }
    }
}
