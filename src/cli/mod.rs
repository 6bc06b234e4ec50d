//! Command-line handlers
//!
//! Thin boundary between the clap definitions in `main.rs` and the core
//! services. Input normalization that belongs to the UI (like substituting a
//! placeholder for a blank description) happens here, not in the core.

use chrono::{Local, NaiveDate};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, Transaction, TransactionId, TransactionType};
use crate::reports::ReportKind;
use crate::services::{BudgetObserver, Ledger};
use crate::storage::NotificationLog;

/// Placeholder used when the caller supplies a blank description
const NO_DESCRIPTION: &str = "(no description)";

/// Observer that surfaces budget warnings on the terminal
pub struct ConsoleNotifier;

impl BudgetObserver for ConsoleNotifier {
    fn update(&self, message: &str) -> FintrackResult<()> {
        println!("⚠ {}", message);
        Ok(())
    }
}

/// Handle `fintrack add`
pub fn handle_add(
    ledger: &mut Ledger,
    amount: f64,
    kind: TransactionType,
    category: Category,
    description: Option<String>,
    date: Option<NaiveDate>,
) -> FintrackResult<()> {
    let description = match description {
        Some(d) if !d.trim().is_empty() => d,
        _ => NO_DESCRIPTION.to_string(),
    };
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let transaction = Transaction::new(date, description, amount, kind, category)?;
    let id = transaction.id;
    ledger.add(transaction);

    println!("Added transaction {}", id);
    Ok(())
}

/// Handle `fintrack delete`
pub fn handle_delete(ledger: &mut Ledger, id: &str) -> FintrackResult<()> {
    let id: TransactionId = id
        .parse()
        .map_err(|e| FintrackError::validation(format!("Invalid transaction id: {}", e)))?;

    ledger.delete(&id);
    println!("Deleted {} (if it existed)", id);
    Ok(())
}

/// Handle `fintrack list`
pub fn handle_list(
    ledger: &Ledger,
    category: Option<Category>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> FintrackResult<()> {
    let transactions = ledger.filter(category, from, to);

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    for tx in &transactions {
        println!("{}  {}", tx.id, tx);
    }
    println!("{} transaction(s)", transactions.len());
    Ok(())
}

/// Handle `fintrack budget set`
pub fn handle_budget_set(ledger: &mut Ledger, amount: f64) -> FintrackResult<()> {
    ledger.set_budget(amount)?;
    println!("Monthly budget set to {:.2}", ledger.budget());
    Ok(())
}

/// Handle `fintrack budget show`
pub fn handle_budget_show(ledger: &Ledger) -> FintrackResult<()> {
    let budget = ledger.budget();
    let spending = ledger.current_month_spending();

    println!("Monthly budget: {:.2}", budget);
    println!("Spent this month: {:.2}", spending);
    if budget > 0.0 {
        println!("Used: {:.1}%", spending / budget * 100.0);
    }
    Ok(())
}

/// Handle `fintrack report`
pub fn handle_report(ledger: &Ledger, kind: ReportKind) -> FintrackResult<()> {
    let snapshot = ledger.transactions();
    println!("{}", kind.generate_now(&snapshot));
    Ok(())
}

/// Handle `fintrack notifications`
pub fn handle_notifications(log: &NotificationLog, limit: usize) -> FintrackResult<()> {
    let lines = log.read_all()?;

    if lines.is_empty() {
        println!("No notifications logged.");
        return Ok(());
    }

    let start = lines.len().saturating_sub(limit);
    for line in &lines[start..] {
        println!("{}", line);
    }
    Ok(())
}
