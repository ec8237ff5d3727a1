//! Expense service
//!
//! Adds and removes expense entries in the in-memory store.

use tracing::debug;

use super::category::CategoryService;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseData;

/// Service for expense entry management
pub struct ExpenseService<'a> {
    data: &'a mut ExpenseData,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(data: &'a mut ExpenseData) -> Self {
        Self { data }
    }

    /// Record a new expense, creating its category if it is not known yet
    pub fn add(&mut self, amount: f64, description: &str, category: &str) -> Expense {
        CategoryService::new(&mut *self.data).ensure(category);

        let expense = Expense::new(amount, description, category);
        self.data.entries.push(expense.clone());
        debug!(amount, category, "expense added");

        expense
    }

    /// Remove the expense at a 1-based position
    ///
    /// Positions outside `1..=len` leave the store unchanged.
    pub fn remove(&mut self, number: i64) -> ExpenseResult<Expense> {
        let len = self.data.entries.len();
        let index = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < len)
            .ok_or_else(|| ExpenseError::expense_not_found(number))?;

        let removed = self.data.entries.remove(index);
        debug!(number, description = %removed.description, "expense removed");
        Ok(removed)
    }
}
