//! Category service
//!
//! Categories are plain names kept in insertion order. Explicit adds are
//! unconditional, so the list may hold duplicates; removal takes out the
//! first exact match only and never touches entries that reference it.

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseData;

/// Service for category management
pub struct CategoryService<'a> {
    data: &'a mut ExpenseData,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(data: &'a mut ExpenseData) -> Self {
        Self { data }
    }

    /// Append a category, even if it is already present
    pub fn add(&mut self, name: &str) -> String {
        if self.data.has_category(name) {
            warn!(category = name, "adding duplicate category");
        }

        self.data.categories.push(name.to_string());
        debug!(category = name, "category added");
        name.to_string()
    }

    /// Append a category only if it is not already present
    ///
    /// Returns `true` when the category was added.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.data.has_category(name) {
            return false;
        }

        self.data.categories.push(name.to_string());
        debug!(category = name, "category created from expense");
        true
    }

    /// Remove the first category that exactly matches `name`
    pub fn remove(&mut self, name: &str) -> ExpenseResult<String> {
        let position = self
            .data
            .categories
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ExpenseError::category_not_found(name))?;

        let removed = self.data.categories.remove(position);

        let referencing = self
            .data
            .entries
            .iter()
            .filter(|e| e.category == removed)
            .count();
        debug!(category = %removed, referencing, "category removed");

        Ok(removed)
    }
}
