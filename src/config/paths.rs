//! Path management for the expense ledger
//!
//! All files live in the process working directory under fixed names:
//!
//! - `expenses.json`: the persisted ledger
//! - `expenses.audit.log`: append-only JSONL change log

use std::path::PathBuf;

use crate::error::LedgerError;

/// File name of the persisted ledger
pub const EXPENSES_FILE_NAME: &str = "expenses.json";

/// File name of the audit log
pub const AUDIT_LOG_FILE_NAME: &str = "expenses.audit.log";

/// Manages all paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the data file and audit log
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths relative to the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current_dir() -> Result<Self, LedgerError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            LedgerError::Io(format!("Failed to determine working directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(
            paths.audit_log(),
            temp_dir.path().join("expenses.audit.log")
        );
    }

    #[test]
    fn test_current_dir_resolution() {
        let paths = LedgerPaths::current_dir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(paths.expenses_file(), cwd.join(EXPENSES_FILE_NAME));
    }
}
