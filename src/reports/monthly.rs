//! Monthly report
//!
//! Summarizes the entries in today's calendar month: totals plus an
//! expense-by-category breakdown sorted descending by amount.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Transaction};

use super::format::format_rupiah;

/// Generate the monthly report for the given snapshot and reference date
pub fn generate(transactions: &[Transaction], today: NaiveDate) -> String {
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.date.month() == today.month() && tx.date.year() == today.year())
        .collect();

    if monthly.is_empty() {
        return format!("No transactions this month ({}).", today.format("%B %Y"));
    }

    let income: f64 = monthly.iter().filter(|tx| tx.is_income()).map(|tx| tx.amount).sum();
    let expense: f64 = monthly.iter().filter(|tx| tx.is_expense()).map(|tx| tx.amount).sum();
    let net = income - expense;

    // Expense totals per category; categories with no expense are omitted
    let mut by_category: HashMap<Category, f64> = HashMap::new();
    for tx in monthly.iter().filter(|tx| tx.is_expense()) {
        *by_category.entry(tx.category).or_insert(0.0) += tx.amount;
    }

    let mut breakdown: Vec<(Category, f64)> = by_category.into_iter().collect();
    // Descending by amount; ties broken by label so the order is stable
    breakdown.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.label().cmp(b.0.label())));

    let mut out = String::new();
    out.push_str(&format!("Monthly Report ({})\n", today.format("%B %Y")));
    out.push_str("----------------------------\n");
    out.push_str(&format!("Total income: {}\n", format_rupiah(income)));
    out.push_str(&format!("Total expense: {}\n", format_rupiah(expense)));
    out.push_str(&format!("Net: {}\n\n", format_rupiah(net)));
    out.push_str("Expenses by category:\n");

    for (category, amount) in &breakdown {
        out.push_str(&format!("- {}: {}\n", category, format_rupiah(*amount)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(date: NaiveDate, amount: f64, category: Category) -> Transaction {
        Transaction::new(date, "e", amount, TransactionType::Expense, category).unwrap()
    }

    #[test]
    fn test_empty_month_message_is_verbatim() {
        let today = date(2025, 8, 30);
        let txns = vec![expense(date(2025, 7, 1), 1_000.0, Category::Food)];

        assert_eq!(
            generate(&txns, today),
            "No transactions this month (August 2025)."
        );
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let today = date(2025, 8, 15);
        let txns = vec![
            expense(today, 20_000.0, Category::Transport),
            expense(today, 100_000.0, Category::Food),
            expense(today, 50_000.0, Category::Food),
            expense(today, 60_000.0, Category::Bills),
        ];

        let report = generate(&txns, today);
        let food_pos = report.find("- Food: Rp 150,000.00").unwrap();
        let bills_pos = report.find("- Bills: Rp 60,000.00").unwrap();
        let transport_pos = report.find("- Transport: Rp 20,000.00").unwrap();
        assert!(food_pos < bills_pos);
        assert!(bills_pos < transport_pos);
    }

    #[test]
    fn test_zero_expense_categories_omitted() {
        let today = date(2025, 8, 15);
        let txns = vec![
            expense(today, 10_000.0, Category::Food),
            Transaction::new(today, "pay", 1_000_000.0, TransactionType::Income, Category::Salary)
                .unwrap(),
        ];

        let report = generate(&txns, today);
        assert!(report.contains("- Food:"));
        // Income categories never show in the expense breakdown
        assert!(!report.contains("- Salary:"));
        assert!(!report.contains("- Transport:"));
    }

    #[test]
    fn test_totals_include_income_and_expense() {
        let today = date(2025, 8, 15);
        let txns = vec![
            expense(today, 300_000.0, Category::Shopping),
            Transaction::new(today, "pay", 2_000_000.0, TransactionType::Income, Category::Salary)
                .unwrap(),
            // Same month, different day still counts
            expense(date(2025, 8, 1), 200_000.0, Category::Food),
            // Same month, different year does not
            expense(date(2024, 8, 15), 999_999.0, Category::Food),
        ];

        let report = generate(&txns, today);
        assert!(report.contains("Total income: Rp 2,000,000.00"));
        assert!(report.contains("Total expense: Rp 500,000.00"));
        assert!(report.contains("Net: Rp 1,500,000.00"));
    }
}
