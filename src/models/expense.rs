//! Expense entry model
//!
//! An expense is a single recorded spend: an amount, a free-text description
//! and the name of the category it belongs to. Categories are referenced by
//! name only.

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent. Negative and zero amounts are allowed.
    pub amount: f64,

    /// Free-text description
    pub description: String,

    /// Category name (not required to exist in the category list)
    pub category: String,
}

impl Expense {
    /// Create a new expense entry
    pub fn new(amount: f64, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Parse a user-typed amount
///
/// Surrounding whitespace is ignored. Negative and zero amounts are accepted;
/// `inf` and `NaN` are not, since JSON cannot represent them.
pub fn parse_amount(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ExpenseError::InvalidAmount(trimmed.to_string())),
    }
}

/// Parse a user-typed, 1-based expense number
///
/// Returns the number as typed; range checking is left to the caller.
pub fn parse_expense_number(input: &str) -> ExpenseResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ExpenseError::InvalidIndex(input.trim().to_string()))
}
