//! Expense summary
//!
//! Total spend plus a per-category breakdown. Buckets are seeded from the
//! category list in order; an entry whose category is no longer listed gets a
//! bucket of its own, appended after the known ones.

use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseData;

/// Spending accumulated for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub name: String,
    /// Sum of entry amounts in this category
    pub total: f64,
    /// Number of entries in this category
    pub count: usize,
    /// Share of the overall total, in percent
    pub percentage: f64,
    /// Whether the category is missing from the category list
    pub unlisted: bool,
}

/// Summary of all recorded expenses
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of all entry amounts
    pub total: f64,
    /// Number of entries
    pub entry_count: usize,
    /// Per-category totals, in category-list order
    pub categories: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Build a summary of the store
    ///
    /// Fails with [`ExpenseError::NoExpenses`] when there are no entries.
    pub fn generate(data: &ExpenseData) -> ExpenseResult<Self> {
        if data.is_empty() {
            return Err(ExpenseError::NoExpenses);
        }

        let mut buckets: Vec<CategoryTotal> = Vec::with_capacity(data.categories.len());
        for name in &data.categories {
            if !buckets.iter().any(|b| &b.name == name) {
                buckets.push(CategoryTotal {
                    name: name.clone(),
                    total: 0.0,
                    count: 0,
                    percentage: 0.0,
                    unlisted: false,
                });
            }
        }

        let mut total = 0.0;
        for entry in &data.entries {
            total += entry.amount;

            let position = buckets.iter().position(|b| b.name == entry.category);
            let bucket = match position {
                Some(index) => &mut buckets[index],
                None => {
                    warn!(category = %entry.category, "expense references an unlisted category");
                    buckets.push(CategoryTotal {
                        name: entry.category.clone(),
                        total: 0.0,
                        count: 0,
                        percentage: 0.0,
                        unlisted: true,
                    });
                    let last = buckets.len() - 1;
                    &mut buckets[last]
                }
            };
            bucket.total += entry.amount;
            bucket.count += 1;
        }

        for bucket in &mut buckets {
            bucket.percentage = if total == 0.0 {
                0.0
            } else {
                bucket.total / total * 100.0
            };
        }

        Ok(Self {
            total,
            entry_count: data.entries.len(),
            categories: buckets,
        })
    }

    /// Category name and total pairs, the input for a pie chart
    pub fn chart_slices(&self) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .map(|c| (c.name.clone(), c.total))
            .collect()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total amount spent: {}{:.2}\n",
            currency, self.total
        ));

        let name_width = self
            .categories
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(8)
            .max(8);

        output.push('\n');
        output.push_str(&format!(
            "{:<width$} {:>12} {:>6} {:>7}\n",
            "Category",
            "Amount",
            "Count",
            "%",
            width = name_width
        ));
        output.push_str(&"-".repeat(name_width + 28));
        output.push('\n');

        for category in &self.categories {
            let marker = if category.unlisted { " *" } else { "" };
            output.push_str(&format!(
                "{:<width$} {:>12} {:>6} {:>6.1}%{}\n",
                category.name,
                format!("{}{:.2}", currency, category.total),
                category.count,
                category.percentage,
                marker,
                width = name_width
            ));
        }

        if self.categories.iter().any(|c| c.unlisted) {
            output.push_str("\n* category no longer in the category list\n");
        }

        output
    }
}
