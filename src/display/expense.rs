//! Expense display formatting
//!
//! Rows look like `1. 50.0 - Food on 2024-01-01`.

use crate::models::{Expense, Listing, ListingEntry};

/// Decimal exponents outside this range switch to scientific notation
const FIXED_NOTATION_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Format an amount in its shortest round-trip form
///
/// Fixed notation always carries a decimal part (`50.0`, `0.0001`).
/// Very large or small magnitudes use a signed exponent of at least two
/// digits (`1e+16`, `2.5e-05`).
pub fn format_amount(amount: f64) -> String {
    // `{:e}` yields the shortest digits that round-trip, e.g. `-1.25e3`
    let scientific = format!("{:e}", amount);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if !FIXED_NOTATION_EXPONENTS.contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut output = String::new();
    if negative {
        output.push('-');
    }

    if exponent < 0 {
        output.push_str("0.");
        output.extend(std::iter::repeat('0').take((-exponent - 1) as usize));
        output.push_str(&digits);
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() > int_len {
            output.push_str(&digits[..int_len]);
            output.push('.');
            output.push_str(&digits[int_len..]);
        } else {
            output.push_str(&digits);
            output.extend(std::iter::repeat('0').take(int_len - digits.len()));
            output.push_str(".0");
        }
    }

    output
}

/// Format an expense as `<amount> - <category> on <date>`
pub fn format_expense(expense: &Expense) -> String {
    format!(
        "{} - {} on {}",
        format_amount(expense.amount),
        expense.category,
        expense.date
    )
}

/// Format one numbered listing row
pub fn format_listing_entry(entry: &ListingEntry<'_>) -> String {
    format!("{}. {}", entry.number, format_expense(entry.expense))
}

/// Format a full listing, one row per line, followed by a blank line
pub fn format_expense_list(listing: Listing<'_>) -> String {
    let mut output = String::new();

    for entry in listing {
        output.push_str(&format_listing_entry(&entry));
        output.push('\n');
    }

    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50.0");
        assert_eq!(format_amount(12.25), "12.25");
        assert_eq!(format_amount(-3.0), "-3.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(1500.0), "1500.0");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_amount_extreme_magnitudes() {
        assert_eq!(format_amount(1e16), "1e+16");
        assert_eq!(format_amount(1.5e16), "1.5e+16");
        assert_eq!(format_amount(-2.5e20), "-2.5e+20");
        assert_eq!(format_amount(123456789012345.0), "123456789012345.0");
        assert_eq!(format_amount(1e-5), "1e-05");
        assert_eq!(format_amount(2.5e-7), "2.5e-07");
        assert_eq!(format_amount(0.0001), "0.0001");
        assert_eq!(format_amount(-0.00012), "-0.00012");
    }

    #[test]
    fn test_format_expense() {
        let expense = Expense::new(50.0, "Food", "2024-01-01");
        assert_eq!(format_expense(&expense), "50.0 - Food on 2024-01-01");
    }

    #[test]
    fn test_format_expense_list() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(50.0, "Food", "2024-01-01"),
            Expense::new(7.5, "Travel", "2024-01-02"),
        ]);

        assert_eq!(
            format_expense_list(ledger.listing()),
            "1. 50.0 - Food on 2024-01-01\n2. 7.5 - Travel on 2024-01-02\n\n"
        );
    }
}
