//! Chart rendering
//!
//! The summary hands a category-to-total mapping to a [`ChartRenderer`];
//! what the renderer does with it (write a file, draw to a window) is its
//! own business.

pub mod pie;

pub use pie::{layout_slices, PieSlice, SvgPieChart};

use std::path::PathBuf;

use crate::error::ExpenseResult;

/// Something that can draw a pie chart of named totals
pub trait ChartRenderer {
    /// Render one slice per value and return where the chart was written
    fn render(&self, title: &str, values: &[(String, f64)]) -> ExpenseResult<PathBuf>;
}
