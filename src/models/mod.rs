//! Core data models for the expense tracker

pub mod expense;

pub use expense::{parse_amount, parse_expense_number, Expense};
