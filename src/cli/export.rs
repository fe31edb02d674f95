//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::export::export_expenses_csv;
use crate::storage::ExpenseStore;

/// Write the expense list as CSV to `output`, or to stdout when not given
pub fn handle_export_command(store: &ExpenseStore, output: Option<PathBuf>) -> TrackerResult<()> {
    match output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                TrackerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_expenses_csv(store.all(), &mut writer)?;
            writer.flush()?;

            println!("Exported {} expenses to: {}", store.len(), output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_expenses_csv(store.all(), &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}
