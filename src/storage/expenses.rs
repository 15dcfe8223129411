//! Expense repository for JSON storage
//!
//! Loads and saves the whole ledger to expenses.json. The file holds a
//! plain JSON array of expense objects.

use std::path::PathBuf;

use crate::error::LedgerError;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the ledger from disk
    ///
    /// A missing file is an empty ledger. A file that cannot be parsed is
    /// reported as `MalformedStorage`.
    pub fn load(&self) -> Result<Ledger, LedgerError> {
        read_json(&self.path)
    }

    /// Save the full ledger, replacing the file contents
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn store_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("expenses.json")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, repo) = setup();
        let ledger = repo.load().unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order_and_values() {
        let (_temp_dir, repo) = setup();
        let ledger = Ledger::from_expenses(vec![
            Expense::new(50.0, "Food", "2024-01-01"),
            Expense::new(-12.25, "Refund", "2024-01-05"),
            Expense::new(0.1, "Food", "not a date"),
            Expense::new(50.0, "Food", "2024-01-01"),
        ]);

        repo.save(&ledger).unwrap();
        let loaded = repo.load().unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let (_temp_dir, repo) = setup();
        let mut ledger = Ledger::from_expenses(vec![
            Expense::new(1.0, "A", "2024-01-01"),
            Expense::new(2.0, "B", "2024-01-02"),
        ]);
        repo.save(&ledger).unwrap();

        ledger.remove(0).unwrap();
        repo.save(&ledger).unwrap();

        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_file_layout() {
        let (temp_dir, repo) = setup();
        let ledger = Ledger::from_expenses(vec![Expense::new(50.0, "Food", "2024-01-01")]);
        repo.save(&ledger).unwrap();

        let contents = std::fs::read_to_string(store_path(&temp_dir)).unwrap();
        let expected = "[\n    {\n        \"amount\": 50.0,\n        \"category\": \"Food\",\n        \"date\": \"2024-01-01\"\n    }\n]";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_load_reads_externally_written_file() {
        let (temp_dir, repo) = setup();
        std::fs::write(
            store_path(&temp_dir),
            r#"[{"amount": 50, "category": "Food", "date": "2024-01-01"}]"#,
        )
        .unwrap();

        let ledger = repo.load().unwrap();
        assert_eq!(ledger.expenses(), &[Expense::new(50.0, "Food", "2024-01-01")]);
    }

    #[test]
    fn test_load_malformed() {
        let (temp_dir, repo) = setup();
        std::fs::write(store_path(&temp_dir), r#"{"amount": 50}"#).unwrap();
        assert!(matches!(repo.load(), Err(LedgerError::MalformedStorage(_))));
    }
}
