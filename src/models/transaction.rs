//! Transaction model
//!
//! An immutable income or expense record. The amount is always strictly
//! positive; the direction of cash flow is carried by the transaction type,
//! never by a negative amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FintrackError, FintrackResult};

use super::category::Category;
use super::ids::TransactionId;

/// Direction of a transaction's contribution to net totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, generated once at creation
    pub id: TransactionId,

    /// Calendar date, no time-of-day
    pub date: NaiveDate,

    /// Non-empty trimmed description
    pub description: String,

    /// Strictly positive Rupiah amount
    pub amount: f64,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Purpose classification
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns a validation error when the trimmed description is empty, the
    /// amount is not strictly positive (or not finite), or an income-only
    /// category is used for an expense.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: Category,
    ) -> FintrackResult<Self> {
        let description = description.into().trim().to_string();

        if description.is_empty() {
            return Err(FintrackError::validation("Description must not be empty"));
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(FintrackError::validation(
                "Amount must be a positive number",
            ));
        }

        if kind == TransactionType::Expense && category.is_income_only() {
            return Err(FintrackError::validation(format!(
                "Category '{}' is reserved for income",
                category
            )));
        }

        Ok(Self {
            id: TransactionId::new(),
            date,
            description,
            amount,
            kind,
            category,
        })
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

// Identity is by id alone; two transactions with equal content but different
// identifiers are distinct entries.
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({}) {}: {:.2}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.description,
            self.amount
        )
    }
}
