//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-cli` on Linux)
//! 3. The current working directory

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_CLI_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker files
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no directory can be determined at all.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.json (categories and entries)
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path of the spreadsheet export
    pub fn export_file(&self) -> PathBuf {
        self.base_dir.join("expenses.xlsx")
    }

    /// Get the path of the plain-text CSV export
    pub fn csv_export_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path of the rendered pie chart
    pub fn chart_file(&self) -> PathBuf {
        self.base_dir.join("expenses.svg")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    if let Some(dirs) = ProjectDirs::from("", "", "expense-cli") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    std::env::current_dir()
        .map_err(|e| ExpenseError::Config(format!("Could not determine data directory: {}", e)))
}
