//! Interactive menu shell
//!
//! Owns the ledger for the run, reads menu choices and prompts line by line,
//! and reports every recoverable error as a message before showing the menu
//! again. End of input ends the session; an operation interrupted by end of
//! input is abandoned without touching the ledger.

pub mod menu;

pub use menu::MenuChoice;

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::display::{format_amount, format_expense, format_expense_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{local_today, parse_amount, Ledger};
use crate::reports::ExpenseSummary;
use crate::services::{AddExpenseInput, ExpenseChanges, ExpenseService};
use crate::storage::Storage;

const INVALID_AMOUNT: &str = "Invalid amount. Please enter a valid number.\n";
const INVALID_INDEX: &str = "Invalid index.\n";
const INVALID_NUMBER: &str = "Invalid input. Please enter a number.\n";

/// Interactive expense tracker session
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    ledger: Ledger,
    input: R,
    output: W,
    fixed_date: Option<NaiveDate>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over a loaded ledger
    pub fn new(storage: &'a Storage, ledger: Ledger, input: R, output: W) -> Self {
        Self {
            storage,
            ledger,
            input,
            output,
            fixed_date: None,
        }
    }

    /// Use a fixed date instead of the local date for blank date input
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    /// Consume the shell, returning the ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        writeln!(self.output, "Personal Expense Tracker\n")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option (1-5): ")? else {
                return self.end_of_input();
            };

            let completed = match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_expense()?,
                Ok(MenuChoice::ViewSummary) => self.view_summary()?,
                Ok(MenuChoice::Edit) => self.edit_expense()?,
                Ok(MenuChoice::Delete) => self.delete_expense()?,
                Ok(MenuChoice::Exit) => {
                    self.say_goodbye()?;
                    return Ok(());
                }
                Err(()) => {
                    writeln!(self.output, "Invalid option. Please enter a number from 1 to 5.\n")?;
                    true
                }
            };

            if !completed {
                return self.end_of_input();
            }
        }
    }

    /// Input ran out; the current operation, if any, was abandoned
    fn end_of_input(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        self.say_goodbye()
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn say_goodbye(&mut self) -> LedgerResult<()> {
        writeln!(
            self.output,
            "Exiting... Thank you for using the Expense Tracker."
        )?;
        Ok(())
    }

    /// Operations return `Ok(false)` when input ended before they could finish.
    fn add_expense(&mut self) -> LedgerResult<bool> {
        let Some(amount) = self.prompt("Enter amount (e.g., 50.00): ")? else {
            return Ok(false);
        };
        if parse_amount(&amount).is_err() {
            writeln!(self.output, "{}", INVALID_AMOUNT)?;
            return Ok(true);
        }

        let Some(category) = self.prompt("Enter category (e.g., Food, Travel): ")? else {
            return Ok(false);
        };
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or press Enter for today: ")? else {
            return Ok(false);
        };

        let today = self.today();
        let result = ExpenseService::new(self.storage, &mut self.ledger)
            .add_on(AddExpenseInput::new(amount, category, date), today);

        match result {
            Ok(_) => writeln!(self.output, "Expense added successfully.\n")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn view_summary(&mut self) -> LedgerResult<bool> {
        match ExpenseSummary::generate(&self.ledger) {
            Some(summary) => write!(self.output, "{}", summary.format_terminal())?,
            None => writeln!(self.output, "No expenses recorded yet.\n")?,
        }
        Ok(true)
    }

    fn edit_expense(&mut self) -> LedgerResult<bool> {
        if self.ledger.is_empty() {
            writeln!(self.output, "No expenses to edit.\n")?;
            return Ok(true);
        }

        write!(self.output, "{}", format_expense_list(self.ledger.listing()))?;
        let Some(index) = self.prompt("Enter the number of the expense to edit: ")? else {
            return Ok(false);
        };

        let current = match self.ledger.resolve_index(&index) {
            Ok(position) => self.ledger.expenses()[position].clone(),
            Err(e) => {
                self.report_error(&e)?;
                return Ok(true);
            }
        };

        writeln!(self.output, "Leave blank to keep the current value.")?;
        let amount_prompt = format!("New amount ({}): ", format_amount(current.amount));
        let Some(amount) = self.prompt(&amount_prompt)? else {
            return Ok(false);
        };
        let Some(category) = self.prompt(&format!("New category ({}): ", current.category))? else {
            return Ok(false);
        };
        let Some(date) = self.prompt(&format!("New date ({}): ", current.date))? else {
            return Ok(false);
        };

        let changes = ExpenseChanges::new()
            .amount(amount)
            .category(category)
            .date(date);
        let result = ExpenseService::new(self.storage, &mut self.ledger).edit(&index, &changes);

        match result {
            Ok(_) => writeln!(self.output, "Expense updated successfully.\n")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn delete_expense(&mut self) -> LedgerResult<bool> {
        if self.ledger.is_empty() {
            writeln!(self.output, "No expenses to delete.\n")?;
            return Ok(true);
        }

        write!(self.output, "{}", format_expense_list(self.ledger.listing()))?;
        let Some(index) = self.prompt("Enter the number of the expense to delete: ")? else {
            return Ok(false);
        };

        let result = ExpenseService::new(self.storage, &mut self.ledger).delete(&index);
        match result {
            Ok(deleted) => writeln!(self.output, "Deleted: {}\n", format_expense(&deleted))?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    /// Print the user-facing message for a failed operation
    fn report_error(&mut self, err: &LedgerError) -> LedgerResult<()> {
        match err {
            LedgerError::InvalidAmount(_) => writeln!(self.output, "{}", INVALID_AMOUNT)?,
            LedgerError::InvalidInput(_) => writeln!(self.output, "{}", INVALID_NUMBER)?,
            LedgerError::IndexOutOfRange { .. } => writeln!(self.output, "{}", INVALID_INDEX)?,
            other => writeln!(self.output, "Failed to save expenses: {}\n", other)?,
        }
        Ok(())
    }

    /// Show a prompt and read one line without its line ending
    ///
    /// Returns `None` at end of input, so a blank answer and no answer differ.
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(local_today)
    }
}
