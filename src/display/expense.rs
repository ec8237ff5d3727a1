//! Expense display formatting

use crate::models::Expense;

/// Format an amount as entered, always keeping a fractional part (`35.0`)
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}

/// Format a single expense on one line
pub fn format_expense(expense: &Expense, currency: &str) -> String {
    format!(
        "Amount: {}{}, Description: {}, Category: {}",
        currency,
        format_amount(expense.amount),
        expense.description,
        expense.category
    )
}

/// Format all expenses as a 1-based numbered list
pub fn format_expense_list(entries: &[Expense], currency: &str) -> String {
    if entries.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, expense) in entries.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, format_expense(expense, currency)));
    }
    output
}

/// Format the highest or lowest expense, e.g. `Highest Expense: Amount: ...`
pub fn format_extreme(label: &str, expense: Option<&Expense>, currency: &str) -> String {
    match expense {
        Some(expense) => format!("{} Expense: {}\n", label, format_expense(expense, currency)),
        None => "No expenses recorded yet.\n".to_string(),
    }
}
