//! Reports over the recorded expenses
//!
//! - Summary: total spend and per-category breakdown
//! - Extremes: highest and lowest single expense

pub mod extremes;
pub mod summary;

pub use extremes::{highest_expense, lowest_expense};
pub use summary::{CategoryTotal, ExpenseSummary};
