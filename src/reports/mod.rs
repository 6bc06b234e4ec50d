//! Report engine
//!
//! A family of interchangeable aggregation algorithms selected at call time.
//! Each consumes a transaction snapshot and a reference date and produces a
//! formatted textual summary; reports are never persisted.

pub mod daily;
pub mod format;
pub mod monthly;
pub mod yearly;

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::models::Transaction;

/// The aggregation window and breakdown style of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Daily,
    Monthly,
    Yearly,
}

impl ReportKind {
    /// Generate the report over a snapshot, with an explicit reference date
    ///
    /// Pure function of its inputs; given a frozen snapshot and a frozen
    /// `today` the output is deterministic.
    pub fn generate(&self, transactions: &[Transaction], today: NaiveDate) -> String {
        match self {
            Self::Daily => daily::generate(transactions, today),
            Self::Monthly => monthly::generate(transactions, today),
            Self::Yearly => yearly::generate(transactions, today),
        }
    }

    /// Generate the report framed around the current local date
    pub fn generate_now(&self, transactions: &[Transaction]) -> String {
        self.generate(transactions, Local::now().date_naive())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!("Unknown report kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};

    #[test]
    fn test_kind_selection_dispatches() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let txns = vec![Transaction::new(
            today,
            "Lunch",
            25_000.0,
            TransactionType::Expense,
            Category::Food,
        )
        .unwrap()];

        assert!(ReportKind::Daily
            .generate(&txns, today)
            .starts_with("Daily Report"));
        assert!(ReportKind::Monthly
            .generate(&txns, today)
            .starts_with("Monthly Report"));
        assert!(ReportKind::Yearly
            .generate(&txns, today)
            .starts_with("Yearly Report"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("daily".parse::<ReportKind>().unwrap(), ReportKind::Daily);
        assert_eq!("Monthly".parse::<ReportKind>().unwrap(), ReportKind::Monthly);
        assert!("weekly".parse::<ReportKind>().is_err());
    }
}
