//! The in-memory ledger
//!
//! Expenses are kept in insertion order. The 1-based position of an expense
//! is the identifier users type when editing or deleting, so positions shift
//! down after a delete.

use std::iter::Enumerate;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::expense::Expense;

/// Ordered collection of expenses for the current run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from existing expenses, keeping their order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// All expenses in order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Iterate expenses in order
    pub fn iter(&self) -> slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Append an expense
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Insert an expense at a 0-based position
    pub fn insert(&mut self, position: usize, expense: Expense) {
        self.expenses.insert(position, expense);
    }

    /// Remove and return the last expense
    pub fn pop(&mut self) -> Option<Expense> {
        self.expenses.pop()
    }

    /// Replace the expense at a 0-based position, returning the old value
    pub fn replace(&mut self, position: usize, expense: Expense) -> LedgerResult<Expense> {
        let len = self.len();
        let slot = self
            .expenses
            .get_mut(position)
            .ok_or(LedgerError::IndexOutOfRange {
                index: position as i64 + 1,
                len,
            })?;
        Ok(std::mem::replace(slot, expense))
    }

    /// Remove the expense at a 0-based position
    pub fn remove(&mut self, position: usize) -> LedgerResult<Expense> {
        if position >= self.len() {
            return Err(LedgerError::IndexOutOfRange {
                index: position as i64 + 1,
                len: self.len(),
            });
        }
        Ok(self.expenses.remove(position))
    }

    /// Turn a user-entered 1-based index into a valid 0-based position
    ///
    /// Fails with `InvalidInput` if the text is not an integer and with
    /// `IndexOutOfRange` if it does not address an expense.
    pub fn resolve_index(&self, raw: &str) -> LedgerResult<usize> {
        let trimmed = raw.trim();
        let index: i64 = trimmed
            .parse()
            .map_err(|_| LedgerError::invalid_input(trimmed))?;

        let out_of_range = LedgerError::IndexOutOfRange {
            index,
            len: self.len(),
        };

        match index.checked_sub(1).map(usize::try_from) {
            Some(Ok(position)) if position < self.len() => Ok(position),
            _ => Err(out_of_range),
        }
    }

    /// Numbered listing of every expense, starting at 1
    ///
    /// The listing borrows the ledger and can be cloned to start over.
    pub fn listing(&self) -> Listing<'_> {
        Listing {
            inner: self.expenses.iter().enumerate(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One row of a ledger listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingEntry<'a> {
    /// 1-based position shown to the user
    pub number: usize,
    /// The listed expense
    pub expense: &'a Expense,
}

/// Lazy numbered iterator over a ledger
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    inner: Enumerate<slice::Iter<'a, Expense>>,
}

impl<'a> Iterator for Listing<'a> {
    type Item = ListingEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(idx, expense)| ListingEntry {
                number: idx + 1,
                expense,
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Listing<'_> {}
