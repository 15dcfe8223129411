//! Reports module for the expense ledger
//!
//! Provides the spending summary: overall total, totals per category and
//! totals per month.

pub mod summary;

pub use summary::{CategoryTotal, ExpenseSummary, MonthTotal};
