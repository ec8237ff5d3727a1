//! CSV Export functionality
//!
//! Writes expense entries as a plain-text table with the columns
//! `amount, description, category` and a header row.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::EXPORT_COLUMNS;
use crate::display::format_amount;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseData;

/// Write entries as CSV, header row first
pub fn export_expenses_csv<W: Write>(entries: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for entry in entries {
        csv_writer
            .write_record([
                format_amount(entry.amount),
                entry.description.clone(),
                entry.category.clone(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Export the in-memory entries to a CSV file, replacing any existing file
///
/// Nothing is written when there are no entries. Returns the number of rows
/// exported.
pub fn export_csv_file(data: &ExpenseData, path: &Path) -> ExpenseResult<usize> {
    if data.is_empty() {
        return Err(ExpenseError::NoExpenses);
    }

    let file = std::fs::File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    export_expenses_csv(&data.entries, file)?;

    info!(path = %path.display(), rows = data.entries.len(), "exported expenses");
    Ok(data.entries.len())
}
