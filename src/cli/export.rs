//! CLI command for data export
//!
//! Exports the saved store without opening the menu.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;
use crate::export::{export_csv_file, export_xlsx_file};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook
    Xlsx,
    /// Plain CSV
    Csv,
}

impl ExportFormat {
    /// Default output file for this format
    pub fn default_output(self, paths: &ExpensePaths) -> PathBuf {
        match self {
            Self::Xlsx => paths.export_file(),
            Self::Csv => paths.csv_export_file(),
        }
    }
}

/// Export the saved entries, returning where they were written and how many
pub fn handle_export_command(
    storage: &Storage,
    paths: &ExpensePaths,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<(PathBuf, usize)> {
    let output = output.unwrap_or_else(|| format.default_output(paths));
    let rows = match format {
        ExportFormat::Xlsx => export_xlsx_file(storage.data(), &output)?,
        ExportFormat::Csv => export_csv_file(storage.data(), &output)?,
    };
    Ok((output, rows))
}
