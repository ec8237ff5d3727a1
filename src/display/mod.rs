//! Display formatting for terminal output
//!
//! Pure string builders; nothing in here writes to the terminal.

pub mod category;
pub mod expense;

pub use category::format_category_list;
pub use expense::{format_amount, format_expense, format_expense_list, format_extreme};
