//! Audit logging for the expense ledger
//!
//! Records every add, edit and delete with before/after snapshots in an
//! append-only JSONL file next to the ledger.
//!
//! - `AuditEntry`: one logged change with timestamp, operation, position and
//!   record snapshots.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: short human-readable summary of changed fields, stored
//!   on update entries.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(1, &expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
