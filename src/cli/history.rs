//! Audit history command

use crate::audit::AuditLogger;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(paths: &TrackerPaths, limit: usize) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    println!(
        "Showing {} of {} entries from {}",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );
    println!();
    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
