//! fintrack - Personal income/expense tracker
//!
//! This library provides the core functionality for the fintrack application:
//! a transaction ledger with a monthly budget monitor, file-based persistence,
//! budget-warning notifications, and aggregated financial reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, identifiers)
//! - `storage`: File storage layer (JSON transactions, plain-text budget,
//!   append-only notification log)
//! - `services`: The ledger, the budget monitor, and the notification bus
//! - `reports`: Daily/monthly/yearly report generation
//! - `cli`: Command-line handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::DataPaths;
//! use fintrack::services::Ledger;
//! use fintrack::storage::Storage;
//!
//! let storage = Storage::new(DataPaths::new())?;
//! let mut ledger = Ledger::new(storage);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
