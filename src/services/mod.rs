//! Service layer for the expense ledger
//!
//! The service layer applies input normalization and persistence on top of
//! the in-memory ledger.

pub mod expense;

pub use expense::{AddExpenseInput, ExpenseChanges, ExpenseService};
