//! Daily report
//!
//! Summarizes the entries dated `today`: totals plus a per-entry listing in
//! ledger order.

use chrono::NaiveDate;

use crate::models::Transaction;

use super::format::format_rupiah;

/// Generate the daily report for the given snapshot and reference date
pub fn generate(transactions: &[Transaction], today: NaiveDate) -> String {
    let daily: Vec<&Transaction> = transactions.iter().filter(|tx| tx.date == today).collect();

    if daily.is_empty() {
        return format!("No transactions today ({}).", today.format("%Y-%m-%d"));
    }

    let income: f64 = daily.iter().filter(|tx| tx.is_income()).map(|tx| tx.amount).sum();
    let expense: f64 = daily.iter().filter(|tx| tx.is_expense()).map(|tx| tx.amount).sum();
    let net = income - expense;

    let mut out = String::new();
    out.push_str(&format!("Daily Report ({})\n", today.format("%Y-%m-%d")));
    out.push_str("----------------------------\n");
    out.push_str(&format!("Total income: {}\n", format_rupiah(income)));
    out.push_str(&format!("Total expense: {}\n", format_rupiah(expense)));
    out.push_str(&format!("Net: {}\n\n", format_rupiah(net)));
    out.push_str("Transactions:\n");

    for tx in &daily {
        out.push_str(&format!(
            "- ({}) {}: {}\n",
            tx.category,
            tx.description,
            format_rupiah(tx.amount)
        ));
    }

    out
}
