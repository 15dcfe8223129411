//! Expense model and input normalization
//!
//! Raw user text is turned into typed fields here: amounts are parsed as
//! decimal numbers, categories are trimmed and title-cased, and empty dates
//! fall back to today.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Date format used for stored dates and month keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the `YYYY-MM` prefix used to group expenses by month
const MONTH_KEY_LEN: usize = 7;

/// A single recorded expense
///
/// Field order matches the persisted JSON object layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent; no currency unit and no sign constraint
    pub amount: f64,

    /// Title-cased category label
    pub category: String,

    /// Date text, normally `YYYY-MM-DD`; not validated as a calendar date
    pub date: String,
}

impl Expense {
    /// Create an expense from already-normalized values
    pub fn new(amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Build an expense from raw user input
    ///
    /// The amount is parsed first; on failure nothing else is evaluated.
    pub fn from_input(
        raw_amount: &str,
        raw_category: &str,
        raw_date: &str,
        today: NaiveDate,
    ) -> LedgerResult<Self> {
        let amount = parse_amount(raw_amount)?;
        Ok(Self {
            amount,
            category: normalize_category(raw_category),
            date: resolve_date(raw_date, today),
        })
    }

    /// The `YYYY-MM` key this expense is grouped under in monthly summaries
    ///
    /// Takes the first seven characters of the date; shorter dates are used whole.
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(MONTH_KEY_LEN) {
            Some((byte_idx, _)) => &self.date[..byte_idx],
            None => &self.date,
        }
    }
}

/// Parse an amount as a decimal number
///
/// Surrounding whitespace is ignored. Non-finite values are rejected because
/// JSON cannot represent them.
pub fn parse_amount(raw: &str) -> LedgerResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::invalid_amount(trimmed)),
    }
}

/// Trim a category and convert it to title case
///
/// Every run of letters starts upper-case and continues lower-case, so
/// `"dining OUT"` becomes `"Dining Out"` and `"o'neil"` becomes `"O'Neil"`.
pub fn normalize_category(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }

    output
}

/// Resolve a date input, defaulting to `today` when empty
pub fn resolve_date(raw: &str, today: NaiveDate) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        today.format(DATE_FORMAT).to_string()
    } else {
        trimmed.to_string()
    }
}

/// Today's date in the local timezone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
