//! Main menu choices and loop state

use std::fmt;

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    RemoveExpense,
    ViewExpenses,
    AddCategory,
    RemoveCategory,
    ViewCategories,
    HighestExpense,
    LowestExpense,
    ViewSummary,
    ExportSpreadsheet,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddExpense,
        MenuChoice::RemoveExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::AddCategory,
        MenuChoice::RemoveCategory,
        MenuChoice::ViewCategories,
        MenuChoice::HighestExpense,
        MenuChoice::LowestExpense,
        MenuChoice::ViewSummary,
        MenuChoice::ExportSpreadsheet,
        MenuChoice::Exit,
    ];

    /// The number the user types for this choice
    pub fn code(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Menu text for this choice
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::RemoveExpense => "Remove Expense",
            MenuChoice::ViewExpenses => "View Expenses",
            MenuChoice::AddCategory => "Add Expense Category",
            MenuChoice::RemoveCategory => "Remove Expense Category",
            MenuChoice::ViewCategories => "View Expense Categories",
            MenuChoice::HighestExpense => "Highest Expense",
            MenuChoice::LowestExpense => "Lowest Expense",
            MenuChoice::ViewSummary => "View Expense Summary",
            MenuChoice::ExportSpreadsheet => "Export to Spreadsheet",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a typed menu number; anything unrecognized is `None`
    pub fn parse(input: &str) -> Option<Self> {
        let code: usize = input.trim().parse().ok()?;
        code.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Whether a blank line should follow this choice in the menu listing
    fn ends_group(self) -> bool {
        matches!(
            self,
            MenuChoice::ViewExpenses
                | MenuChoice::ViewCategories
                | MenuChoice::LowestExpense
                | MenuChoice::ExportSpreadsheet
        )
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.code(), self.label())
    }
}

/// State of the interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

/// Render the main menu
pub fn format_menu() -> String {
    let mut output = String::from("\nExpense Recording System Menu:\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
        if choice.ends_group() {
            output.push('\n');
        }
    }
    output
}
