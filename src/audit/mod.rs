//! Audit logging for the expense tracker
//!
//! Every add, edit and delete is appended to a line-delimited JSON log with
//! the expense before and after the change.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries to, and reads them back from, the log file
//! - `generate_diff`: human-readable summary of what an edit changed

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
