//! Storage layer for the expense tracker
//!
//! The whole store (categories plus entries) lives in memory and is read from
//! and written to a single JSON file in one piece. Nothing is persisted until
//! [`Storage::save`] is called.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExpenseError;
use crate::models::Expense;

/// The in-memory store and the unit of persistence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    /// Category names in insertion order
    pub categories: Vec<String>,
    /// Expense entries in insertion order
    pub entries: Vec<Expense>,
}

impl ExpenseData {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a category name is present in the category list
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

/// Store coordinator: the in-memory data plus the file it is persisted to
#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
    data: ExpenseData,
}

impl Storage {
    /// Create an empty storage bound to a persistence file, without reading it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: ExpenseData::new(),
        }
    }

    /// Open storage, loading the persistence file if it exists
    ///
    /// A malformed file is an error.
    pub fn open(path: PathBuf) -> Result<Self, ExpenseError> {
        let mut storage = Self::new(path);
        storage.load()?;
        Ok(storage)
    }

    /// Get the in-memory store
    pub fn data(&self) -> &ExpenseData {
        &self.data
    }

    /// Get the in-memory store for mutation
    pub fn data_mut(&mut self) -> &mut ExpenseData {
        &mut self.data
    }

    /// Replace the in-memory store with the contents of the persistence file
    pub fn load(&mut self) -> Result<(), ExpenseError> {
        self.data = read_json(&self.path)?;
        info!(
            path = %self.path.display(),
            categories = self.data.categories.len(),
            entries = self.data.entries.len(),
            "loaded expense data"
        );
        Ok(())
    }

    /// Overwrite the persistence file with the in-memory store
    pub fn save(&self) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, &self.data)?;
        info!(
            path = %self.path.display(),
            entries = self.data.entries.len(),
            "saved expense data"
        );
        Ok(())
    }
}
