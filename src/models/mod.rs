//! Core data models for fintrack
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, their types, categories, and identifiers.

pub mod category;
pub mod ids;
pub mod transaction;

pub use category::Category;
pub use ids::TransactionId;
pub use transaction::{Transaction, TransactionType};
