//! expense-cli - Terminal-based personal expense tracker
//!
//! Records spending entries (amount, description, category) against a small
//! set of user-defined categories, keeps them in a single JSON file, and
//! offers totals, a per-category breakdown with a pie chart, highest/lowest
//! lookups and a spreadsheet export.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: The expense entry and input parsing
//! - `storage`: The in-memory store and its JSON persistence
//! - `services`: Expense and category operations on the store
//! - `reports`: Summary and highest/lowest lookups
//! - `chart`: Pie chart rendering
//! - `export`: Spreadsheet export (Excel and CSV)
//! - `display`: Terminal formatting
//! - `cli`: The interactive menu
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::services::ExpenseService;
//! use expense_cli::storage::Storage;
//!
//! let mut storage = Storage::open("expenses.json".into())?;
//! ExpenseService::new(storage.data_mut()).add(50.25, "Groceries", "groceries");
//! storage.save()?;
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
