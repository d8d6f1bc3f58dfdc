//! High-level operations that correspond to CLI commands
//!
//! These modules hold the business logic of a run, separated from CLI
//! concerns like argument parsing and exit codes.

pub mod rename;

pub use rename::{rename_operation, RenameOptions, RenameSummary};
