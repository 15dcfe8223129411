//! Expense Ledger - single-user command-line expense tracker
//!
//! Records expenses (amount, category, date) in a JSON file in the working
//! directory and reports totals overall, per category and per month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data file and audit log
//! - `error`: Custom error types
//! - `models`: `Expense`, `Ledger` and input normalization
//! - `storage`: JSON file storage layer
//! - `services`: Add, edit, delete and list operations
//! - `reports`: Spending summary
//! - `display`: Terminal formatting
//! - `audit`: Audit logging system
//! - `shell`: Interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::services::{AddExpenseInput, ExpenseService};
//! use expense_ledger::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::current_dir()?);
//! let mut ledger = storage.load_ledger()?;
//! ExpenseService::new(&storage, &mut ledger).add(AddExpenseInput::new("12.50", "food", ""))?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::LedgerError;
