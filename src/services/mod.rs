//! Business logic layer
//!
//! Services borrow the in-memory store and mutate it in place. They never
//! touch the disk; persistence is the caller's decision.

pub mod category;
pub mod expense;

pub use category::CategoryService;
pub use expense::ExpenseService;
