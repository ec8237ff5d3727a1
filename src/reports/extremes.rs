//! Highest and lowest expense lookups
//!
//! Linear scans with strict comparison, so on ties the earliest entry wins.

use crate::models::Expense;

/// The entry with the largest amount, or `None` if there are no entries
pub fn highest_expense(entries: &[Expense]) -> Option<&Expense> {
    let mut iter = entries.iter();
    let mut best = iter.next()?;
    for entry in iter {
        if entry.amount > best.amount {
            best = entry;
        }
    }
    Some(best)
}

/// The entry with the smallest amount, or `None` if there are no entries
pub fn lowest_expense(entries: &[Expense]) -> Option<&Expense> {
    let mut iter = entries.iter();
    let mut best = iter.next()?;
    for entry in iter {
        if entry.amount < best.amount {
            best = entry;
        }
    }
    Some(best)
}
