//! Configuration module for the expense ledger
//!
//! The ledger has no user-editable settings; this module only resolves the
//! fixed file locations used by storage and the audit log.

pub mod paths;

pub use paths::LedgerPaths;
