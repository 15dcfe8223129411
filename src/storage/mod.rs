//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and the audit trail that
//! accompanies every persisted change.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Expense, Ledger};

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the ledger from disk
    pub fn load_ledger(&self) -> Result<Ledger, LedgerError> {
        self.expenses.load()
    }

    /// Persist the full ledger
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.expenses.save(ledger)
    }

    /// Record an added expense in the audit log
    pub fn log_create(&self, position: usize, expense: &Expense) -> Result<(), LedgerError> {
        self.audit.log(&AuditEntry::create(position, expense))
    }

    /// Record an edited expense in the audit log
    pub fn log_update(
        &self,
        position: usize,
        before: &Expense,
        after: &Expense,
    ) -> Result<(), LedgerError> {
        self.audit.log(&AuditEntry::update(position, before, after))
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete(&self, position: usize, expense: &Expense) -> Result<(), LedgerError> {
        self.audit.log(&AuditEntry::delete(position, expense))
    }
}
