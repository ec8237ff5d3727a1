//! Export module for the expense tracker
//!
//! Spreadsheet export of the recorded entries. The menu writes an Excel
//! workbook; `expense export --format csv` writes the same table as CSV.

pub mod csv;
pub mod xlsx;

pub use self::csv::{export_csv_file, export_expenses_csv};
pub use self::xlsx::{export_xlsx_file, expenses_workbook};

/// Column order of the exported table
pub const EXPORT_COLUMNS: [&str; 3] = ["amount", "description", "category"];
