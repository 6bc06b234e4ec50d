//! Yearly report
//!
//! Summarizes the entries in today's calendar year: overall totals plus a
//! per-month income/expense breakdown in calendar order, listing only months
//! with activity.

use chrono::{Datelike, NaiveDate};

use crate::models::Transaction;

use super::format::format_rupiah;

/// English month names, calendar order; the only twelve possible buckets
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Generate the yearly report for the given snapshot and reference date
pub fn generate(transactions: &[Transaction], today: NaiveDate) -> String {
    let year = today.year();
    let yearly: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.date.year() == year)
        .collect();

    if yearly.is_empty() {
        return format!("No transactions this year ({}).", year);
    }

    let mut income_per_month = [0.0f64; 12];
    let mut expense_per_month = [0.0f64; 12];

    for tx in &yearly {
        let bucket = (tx.date.month() - 1) as usize;
        if tx.is_income() {
            income_per_month[bucket] += tx.amount;
        } else {
            expense_per_month[bucket] += tx.amount;
        }
    }

    let total_income: f64 = income_per_month.iter().sum();
    let total_expense: f64 = expense_per_month.iter().sum();

    let mut out = String::new();
    out.push_str(&format!("Yearly Report ({})\n", year));
    out.push_str("----------------------------\n");
    out.push_str(&format!("Total income: {}\n", format_rupiah(total_income)));
    out.push_str(&format!("Total expense: {}\n", format_rupiah(total_expense)));
    out.push_str(&format!(
        "Net: {}\n\n",
        format_rupiah(total_income - total_expense)
    ));
    out.push_str("Monthly summary:\n");

    for (bucket, name) in MONTH_NAMES.iter().enumerate() {
        let income = income_per_month[bucket];
        let expense = expense_per_month[bucket];
        if income > 0.0 || expense > 0.0 {
            out.push_str(&format!(
                "- {}: income {} | expense {} | net {}\n",
                name,
                format_rupiah(income),
                format_rupiah(expense),
                format_rupiah(income - expense)
            ));
        }
    }

    out
}
