//! Core data models for the expense ledger
//!
//! An `Expense` is the only entity; a `Ledger` is the ordered, in-memory
//! collection of expenses for one run of the program.

pub mod expense;
pub mod ledger;

pub use expense::{local_today, normalize_category, parse_amount, resolve_date, Expense};
pub use ledger::{Ledger, Listing, ListingEntry};
