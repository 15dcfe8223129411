//! Expense Summary
//!
//! Aggregates the ledger into a grand total, per-category totals in
//! first-seen order, and per-month totals sorted by `YYYY-MM` key.

use std::collections::{BTreeMap, HashMap};

use crate::models::Ledger;

/// Total spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label
    pub category: String,
    /// Sum of amounts in this category
    pub total: f64,
}

/// Total spending in one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    /// `YYYY-MM` key taken from the expense dates
    pub month: String,
    /// Sum of amounts in this month
    pub total: f64,
}

/// Expense Summary
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: f64,
    /// Per-category totals, in the order categories first appear
    pub by_category: Vec<CategoryTotal>,
    /// Per-month totals, ascending by month key
    pub by_month: Vec<MonthTotal>,
}

impl ExpenseSummary {
    /// Generate a summary of the ledger
    ///
    /// Returns `None` for an empty ledger.
    pub fn generate(ledger: &Ledger) -> Option<Self> {
        if ledger.is_empty() {
            return None;
        }

        let mut total = 0.0;
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut category_slots: HashMap<&str, usize> = HashMap::new();
        let mut by_month: BTreeMap<&str, f64> = BTreeMap::new();

        for expense in ledger {
            total += expense.amount;

            let slot = *category_slots
                .entry(expense.category.as_str())
                .or_insert_with(|| {
                    by_category.push(CategoryTotal {
                        category: expense.category.clone(),
                        total: 0.0,
                    });
                    by_category.len() - 1
                });
            by_category[slot].total += expense.amount;

            *by_month.entry(expense.month_key()).or_insert(0.0) += expense.amount;
        }

        let by_month = by_month
            .into_iter()
            .map(|(month, total)| MonthTotal {
                month: month.to_string(),
                total,
            })
            .collect();

        Some(Self {
            total,
            by_category,
            by_month,
        })
    }

    /// Format the summary for terminal output
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("\nExpense Summary:\n");
        output.push_str(&format!("Total Spending: {:.2}\n", self.total));

        output.push_str("\nSpending by Category:\n");
        for row in &self.by_category {
            output.push_str(&format!("{}: {:.2}\n", row.category, row.total));
        }

        output.push_str("\nMonthly Spending:\n");
        for row in &self.by_month {
            output.push_str(&format!("{}: {:.2}\n", row.month, row.total));
        }

        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_ledger_has_no_summary() {
        assert!(ExpenseSummary::generate(&Ledger::new()).is_none());
    }

    #[test]
    fn test_single_category_single_month() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(10.0, "Travel", "2024-02-15"),
            Expense::new(20.0, "Travel", "2024-02-20"),
        ]);

        let summary = ExpenseSummary::generate(&ledger).unwrap();
        assert!(approx_eq(summary.total, 30.0));
        assert_eq!(
            summary.by_category,
            vec![CategoryTotal {
                category: "Travel".into(),
                total: 30.0
            }]
        );
        assert_eq!(
            summary.by_month,
            vec![MonthTotal {
                month: "2024-02".into(),
                total: 30.0
            }]
        );
    }

    #[test]
    fn test_category_order_is_first_seen() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(1.0, "Rent", "2024-03-01"),
            Expense::new(2.0, "Food", "2024-01-01"),
            Expense::new(3.0, "Rent", "2024-02-01"),
            Expense::new(4.0, "Bills", "2024-01-09"),
        ]);

        let summary = ExpenseSummary::generate(&ledger).unwrap();
        let order: Vec<&str> = summary
            .by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(order, vec!["Rent", "Food", "Bills"]);
        assert_eq!(summary.by_category[0].total, 4.0);
    }

    #[test]
    fn test_months_sorted_ascending() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(1.0, "A", "2024-03-01"),
            Expense::new(2.0, "A", "2023-12-31"),
            Expense::new(3.0, "A", "2024-01-15"),
            Expense::new(4.0, "A", "2024-03-20"),
        ]);

        let summary = ExpenseSummary::generate(&ledger).unwrap();
        let months: Vec<&str> = summary.by_month.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
        assert_eq!(summary.by_month[2].total, 5.0);
    }

    #[test]
    fn test_total_matches_sum_including_negatives() {
        let amounts = [12.34, -5.0, 0.1, 0.2, 1000.0];
        let ledger = Ledger::from_expenses(
            amounts
                .iter()
                .map(|&a| Expense::new(a, "Misc", "2024-01-01"))
                .collect(),
        );

        let summary = ExpenseSummary::generate(&ledger).unwrap();
        assert!(approx_eq(summary.total, amounts.iter().sum()));
    }

    #[test]
    fn test_summary_is_idempotent() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(10.0, "Food", "2024-01-01"),
            Expense::new(5.5, "Travel", "2024-02-01"),
        ]);

        let first = ExpenseSummary::generate(&ledger).unwrap();
        let second = ExpenseSummary::generate(&ledger).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.format_terminal(), second.format_terminal());
    }

    #[test]
    fn test_format_terminal() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(10.0, "Travel", "2024-02-15"),
            Expense::new(20.0, "Travel", "2024-02-20"),
        ]);

        let output = ExpenseSummary::generate(&ledger).unwrap().format_terminal();
        assert_eq!(
            output,
            "\nExpense Summary:\nTotal Spending: 30.00\n\
             \nSpending by Category:\nTravel: 30.00\n\
             \nMonthly Spending:\n2024-02: 30.00\n\n"
        );
    }
}
