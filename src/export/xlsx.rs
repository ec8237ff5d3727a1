//! Excel export
//!
//! Writes expense entries to a single-sheet `.xlsx` workbook: a bold header
//! row, then one row per entry with the amount as a numeric cell.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use super::EXPORT_COLUMNS;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseData;

/// Name of the worksheet holding the entries
pub const SHEET_NAME: &str = "Expenses";

/// Build a workbook with one row per entry, header row first
pub fn expenses_workbook(entries: &[Expense]) -> ExpenseResult<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_number(row, 0, entry.amount)?;
        worksheet.write_string(row, 1, entry.description.as_str())?;
        worksheet.write_string(row, 2, entry.category.as_str())?;
    }

    Ok(workbook)
}

/// Export the in-memory entries to an `.xlsx` file, replacing any existing file
///
/// Nothing is written when there are no entries. Returns the number of rows
/// exported.
pub fn export_xlsx_file(data: &ExpenseData, path: &Path) -> ExpenseResult<usize> {
    if data.is_empty() {
        return Err(ExpenseError::NoExpenses);
    }

    let mut workbook = expenses_workbook(&data.entries)?;
    workbook.save(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), rows = data.entries.len(), "exported expenses");
    Ok(data.entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // .xlsx files are zip archives
    const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

    fn sample() -> ExpenseData {
        ExpenseData {
            categories: vec!["groceries".into()],
            entries: vec![
                Expense::new(50.25, "Groceries for the week", "groceries"),
                Expense::new(35.0, "Fuel", "transportation"),
            ],
        }
    }

    #[test]
    fn test_workbook_serializes() {
        let mut workbook = expenses_workbook(&sample().entries).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        assert!(bytes.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn test_export_xlsx_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.xlsx");
        std::fs::write(&path, "stale contents").unwrap();

        let rows = export_xlsx_file(&sample(), &path).unwrap();
        assert_eq!(rows, 2);

        let contents = std::fs::read(&path).unwrap();
        assert!(contents.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn test_export_empty_store_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.xlsx");

        let err = export_xlsx_file(&ExpenseData::new(), &path).unwrap_err();
        assert!(matches!(err, ExpenseError::NoExpenses));
        assert!(!path.exists());
    }
}
