//! Expense service
//!
//! Add, edit, delete and list operations over the ledger. Every mutation
//! persists the whole ledger before returning; if the save fails the ledger
//! is restored so no partial change survives.

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{local_today, normalize_category, parse_amount, Expense, Ledger};
use crate::storage::Storage;

/// Raw input for adding an expense
#[derive(Debug, Clone, Default)]
pub struct AddExpenseInput {
    pub amount: String,
    pub category: String,
    /// Empty means today
    pub date: String,
}

impl AddExpenseInput {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Replacement values for an edit
///
/// Only a completely empty field keeps the current value; anything else,
/// including whitespace, replaces it after normalization.
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseChanges {
    /// Create an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Replace the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Replace the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Apply the changes to a copy of `current`
    ///
    /// The amount is parsed before anything else, so an invalid amount
    /// produces an error without a partially-updated record.
    fn apply_to(&self, current: &Expense) -> LedgerResult<Expense> {
        let mut updated = current.clone();

        if !self.amount.is_empty() {
            updated.amount = parse_amount(&self.amount)?;
        }
        if !self.category.is_empty() {
            updated.category = normalize_category(&self.category);
        }
        if !self.date.is_empty() {
            updated.date = self.date.trim().to_string();
        }

        Ok(updated)
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over a ledger
    pub fn new(storage: &'a Storage, ledger: &'a mut Ledger) -> Self {
        Self { storage, ledger }
    }

    /// Add an expense dated today when no date is given
    pub fn add(&mut self, input: AddExpenseInput) -> LedgerResult<Expense> {
        self.add_on(input, local_today())
    }

    /// Add an expense, using `today` as the default date
    pub fn add_on(&mut self, input: AddExpenseInput, today: NaiveDate) -> LedgerResult<Expense> {
        let expense = Expense::from_input(&input.amount, &input.category, &input.date, today)?;

        self.ledger.push(expense.clone());
        if let Err(e) = self.storage.save_ledger(self.ledger) {
            self.ledger.pop();
            return Err(e);
        }

        let position = self.ledger.len();
        warn_on_audit_failure(self.storage.log_create(position, &expense));

        Ok(expense)
    }

    /// Edit the expense at a user-entered 1-based index
    ///
    /// Returns the updated expense.
    pub fn edit(&mut self, index: &str, changes: &ExpenseChanges) -> LedgerResult<Expense> {
        let position = self.ledger.resolve_index(index)?;
        let before = self.ledger.expenses()[position].clone();
        let after = changes.apply_to(&before)?;

        self.ledger.replace(position, after.clone())?;
        if let Err(e) = self.storage.save_ledger(self.ledger) {
            self.ledger.replace(position, before)?;
            return Err(e);
        }

        warn_on_audit_failure(self.storage.log_update(position + 1, &before, &after));

        Ok(after)
    }

    /// Delete the expense at a user-entered 1-based index
    ///
    /// Later expenses move up one position. Returns the deleted expense.
    pub fn delete(&mut self, index: &str) -> LedgerResult<Expense> {
        let position = self.ledger.resolve_index(index)?;
        let deleted = self.ledger.remove(position)?;

        if let Err(e) = self.storage.save_ledger(self.ledger) {
            self.ledger.insert(position, deleted);
            return Err(e);
        }

        warn_on_audit_failure(self.storage.log_delete(position + 1, &deleted));

        Ok(deleted)
    }
}

/// The ledger is already persisted when auditing runs, so a failed audit
/// write is reported but does not fail the operation.
fn warn_on_audit_failure(result: LedgerResult<()>) {
    if let Err(e) = result {
        eprintln!("Warning: failed to write audit log: {}", e);
    }
}
