//! Interactive menu loop
//!
//! The shell owns the store for the session. Each menu choice runs one
//! operation against the in-memory data; recoverable errors become console
//! messages and the loop keeps going. Data is written only on Exit.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::menu::{format_menu, MenuChoice, MenuState};
use super::prompt::Console;
use crate::chart::{ChartRenderer, SvgPieChart};
use crate::config::{ExpensePaths, Settings};
use crate::display::{format_category_list, format_expense_list, format_extreme};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_xlsx_file;
use crate::models::{parse_amount, parse_expense_number};
use crate::reports::{highest_expense, lowest_expense, ExpenseSummary};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

/// The interactive expense shell
pub struct Shell<R, W> {
    storage: Storage,
    settings: Settings,
    export_path: PathBuf,
    chart: Box<dyn ChartRenderer>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell that exports and charts next to the data file
    pub fn new(
        storage: Storage,
        settings: Settings,
        paths: &ExpensePaths,
        input: R,
        output: W,
    ) -> Self {
        let chart = SvgPieChart::new(paths.chart_file(), settings.chart_start_angle);
        Self {
            storage,
            settings,
            export_path: paths.export_file(),
            chart: Box::new(chart),
            console: Console::new(input, output),
        }
    }

    /// Replace the chart renderer
    pub fn with_chart(mut self, chart: Box<dyn ChartRenderer>) -> Self {
        self.chart = chart;
        self
    }

    /// Get the session's storage
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Finish the session and give back the writer
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until Exit is chosen or input ends
    ///
    /// Only console write failures and unreadable menu input other than
    /// undecodable text are returned as errors.
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.console.print(&format_menu())?;
            let choice = match self.console.prompt("Enter your choice: ") {
                Ok(Some(choice)) => choice,
                Ok(None) => {
                    info!("input closed, leaving without saving");
                    self.console.println("\nInput closed. Exiting without saving.")?;
                    return Ok(());
                }
                Err(e) if e.is_invalid_input() => {
                    debug!(error = %e, "undecodable menu choice");
                    self.console.println("Invalid choice. Please try again.")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.step(&choice)? == MenuState::Exiting {
                return Ok(());
            }
        }
    }

    /// Handle one typed menu choice
    pub fn step(&mut self, input: &str) -> ExpenseResult<MenuState> {
        match MenuChoice::parse(input) {
            Some(choice) => self.dispatch(choice),
            None => {
                self.console.println("Invalid choice. Please try again.")?;
                Ok(MenuState::Running)
            }
        }
    }

    /// Run the operation behind a menu choice
    pub fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<MenuState> {
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddExpense => self.add_expense()?,
            MenuChoice::RemoveExpense => self.remove_expense()?,
            MenuChoice::ViewExpenses => self.view_expenses()?,
            MenuChoice::AddCategory => self.add_category()?,
            MenuChoice::RemoveCategory => self.remove_category()?,
            MenuChoice::ViewCategories => self.view_categories()?,
            MenuChoice::HighestExpense => {
                let text = format_extreme(
                    "Highest",
                    highest_expense(&self.storage.data().entries),
                    &self.settings.currency_symbol,
                );
                self.console.print(&text)?;
            }
            MenuChoice::LowestExpense => {
                let text = format_extreme(
                    "Lowest",
                    lowest_expense(&self.storage.data().entries),
                    &self.settings.currency_symbol,
                );
                self.console.print(&text)?;
            }
            MenuChoice::ViewSummary => self.view_summary()?,
            MenuChoice::ExportSpreadsheet => self.export_spreadsheet()?,
            MenuChoice::Exit => return self.exit(),
        }

        Ok(MenuState::Running)
    }

    /// Prompt inside an operation
    ///
    /// A failed read is reported and yields `None`, which aborts the
    /// operation and returns to the menu.
    fn ask(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        match self.console.prompt(prompt) {
            Err(e @ ExpenseError::Input { .. }) => {
                warn!(error = %e, "input not readable, operation aborted");
                self.console.println(&format!("An error occurred: {}", e))?;
                Ok(None)
            }
            other => other,
        }
    }

    fn add_expense(&mut self) -> ExpenseResult<()> {
        let prompt = format!("Enter the amount spent: {}", self.settings.currency_symbol);
        let Some(amount_input) = self.ask(&prompt)? else {
            return Ok(());
        };
        let amount = match parse_amount(&amount_input) {
            Ok(amount) => amount,
            Err(e) => return self.console.println(&e.to_string()),
        };

        let Some(description) = self.ask("Enter a brief description: ")? else {
            return Ok(());
        };

        let available =
            format_category_list("Available Categories", &self.storage.data().categories);
        self.console.print(&available)?;
        let Some(category) = self.ask("Enter expense category: ")? else {
            return Ok(());
        };

        ExpenseService::new(self.storage.data_mut()).add(amount, &description, &category);
        self.console.println("Expense added successfully!")
    }

    fn remove_expense(&mut self) -> ExpenseResult<()> {
        if self.storage.data().is_empty() {
            return self.console.println("No expenses recorded yet.");
        }

        self.view_expenses()?;
        let Some(input) = self.ask("Enter the number of the expense to remove: ")? else {
            return Ok(());
        };

        let number = match parse_expense_number(&input) {
            Ok(number) => number,
            Err(e) => return self.console.println(&e.to_string()),
        };

        match ExpenseService::new(self.storage.data_mut()).remove(number) {
            Ok(removed) => self.console.println(&format!(
                "Expense '{}' removed successfully!",
                removed.description
            )),
            Err(e) if e.is_not_found() => self.console.println("Invalid expense number."),
            Err(e) => self.console.println(&format!("An error occurred: {}", e)),
        }
    }

    fn view_expenses(&mut self) -> ExpenseResult<()> {
        let text =
            format_expense_list(&self.storage.data().entries, &self.settings.currency_symbol);
        self.console.print(&text)
    }

    fn add_category(&mut self) -> ExpenseResult<()> {
        let Some(name) = self.ask("Enter new expense category: ")? else {
            return Ok(());
        };

        let added = CategoryService::new(self.storage.data_mut()).add(&name);
        self.console
            .println(&format!("Category '{}' added successfully!", added))
    }

    fn remove_category(&mut self) -> ExpenseResult<()> {
        let available =
            format_category_list("Available Categories", &self.storage.data().categories);
        self.console.print(&available)?;
        let Some(name) = self.ask("Enter the category to remove: ")? else {
            return Ok(());
        };

        match CategoryService::new(self.storage.data_mut()).remove(&name) {
            Ok(removed) => self
                .console
                .println(&format!("Category '{}' removed successfully!", removed)),
            Err(_) => self
                .console
                .println(&format!("Category '{}' not found.", name)),
        }
    }

    fn view_categories(&mut self) -> ExpenseResult<()> {
        let text = format_category_list("Expense Categories", &self.storage.data().categories);
        self.console.print(&text)
    }

    fn view_summary(&mut self) -> ExpenseResult<()> {
        let summary = match ExpenseSummary::generate(self.storage.data()) {
            Ok(summary) => summary,
            Err(e) => return self.console.println(&e.to_string()),
        };

        self.console
            .print(&summary.format_terminal(&self.settings.currency_symbol))?;

        match self
            .chart
            .render(&self.settings.chart_title, &summary.chart_slices())
        {
            Ok(path) => self
                .console
                .println(&format!("Pie chart saved to '{}'.", path.display())),
            Err(e) => {
                warn!(error = %e, "chart not rendered");
                self.console.println(&e.to_string())
            }
        }
    }

    fn export_spreadsheet(&mut self) -> ExpenseResult<()> {
        match export_xlsx_file(self.storage.data(), &self.export_path) {
            Ok(_) => {
                let message = format!(
                    "Expense data exported to '{}' successfully.",
                    self.export_path.display()
                );
                self.console.println(&message)
            }
            Err(ExpenseError::NoExpenses) => self.console.println("No expenses recorded yet."),
            Err(e) => self.console.println(&e.to_string()),
        }
    }

    fn exit(&mut self) -> ExpenseResult<MenuState> {
        match self.storage.save() {
            Ok(()) => {
                self.console.println("Expense data saved. Exiting program.")?;
                Ok(MenuState::Exiting)
            }
            Err(e) => {
                warn!(error = %e, "save failed, staying in the menu");
                self.console
                    .println(&format!("Failed to save expense data: {}", e))?;
                Ok(MenuState::Running)
            }
        }
    }
}
