//! Interactive menu loop
//!
//! Line-oriented prompts over any `BufRead`/`Write` pair. Rejected input is
//! reported and the menu is shown again; storage and terminal failures end
//! the loop with an error.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseDraft, ExpenseUpdate, TimeBucket};
use crate::reports::{category_total, overall_total, totals_by_category, SpendingOverTime};
use crate::services::{ActionKind, ExpenseService, ModifyAction, ModifyOutcome};
use crate::storage::ExpenseStore;
use crate::tui::ChartRenderer;

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Summary,
    Modify,
    Chart,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Summary),
            "3" => Ok(Self::Modify),
            "4" => Ok(Self::Chart),
            "5" => Ok(Self::Exit),
            other => Err(TrackerError::UnrecognizedChoice(other.to_string())),
        }
    }
}

/// Entries of the "View summary" sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryChoice {
    ByCategory,
    Overall,
    OverTime,
}

impl FromStr for SummaryChoice {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::ByCategory),
            "2" => Ok(Self::Overall),
            "3" => Ok(Self::OverTime),
            other => Err(TrackerError::UnrecognizedChoice(other.to_string())),
        }
    }
}

/// The interactive session
pub struct Menu<'a, R, W> {
    store: &'a mut ExpenseStore,
    settings: &'a Settings,
    chart: &'a mut dyn ChartRenderer,
    input: R,
    output: W,
    input_closed: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        store: &'a mut ExpenseStore,
        settings: &'a Settings,
        chart: &'a mut dyn ChartRenderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            settings,
            chart,
            input,
            output,
            input_closed: false,
        }
    }

    /// Run until the user picks "Exit" or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.print_menu()?;
            let answer = self.ask("Choose an option: ")?;
            if self.input_closed && answer.is_empty() {
                writeln!(self.output)?;
                return Ok(());
            }

            let result = match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => return Ok(()),
                Ok(MenuChoice::Add) => self.add_expense(),
                Ok(MenuChoice::Summary) => self.view_summary(),
                Ok(MenuChoice::Modify) => self.modify_expense(),
                Ok(MenuChoice::Chart) => self.show_chart(),
                Err(_) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Ok(())
                }
            };
            self.report(result)?;
            self.report_audit_failures()?;
        }
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Expense Tracker Menu")?;
        writeln!(self.output, "1. Add an expense")?;
        writeln!(self.output, "2. View summary")?;
        writeln!(self.output, "3. Delete/Edit an expense")?;
        writeln!(self.output, "4. View graphical summary")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print a prompt and read one line; end of input reads as blank
    fn ask(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.input_closed = true;
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print rejected input, propagate everything else
    fn report(&mut self, result: TrackerResult<()>) -> TrackerResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(TrackerError::InvalidSelection { .. }) => {
                writeln!(self.output, "Invalid selection")?;
                Ok(())
            }
            Err(TrackerError::UnrecognizedChoice(_)) => {
                writeln!(self.output, "Invalid option.")?;
                Ok(())
            }
            Err(err) if err.is_user_input() => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// The change itself was saved; only its history entry is missing
    fn report_audit_failures(&mut self) -> TrackerResult<()> {
        for err in self.store.take_audit_failures() {
            writeln!(
                self.output,
                "Warning: change saved but not written to the audit log: {}",
                err
            )?;
        }
        Ok(())
    }

    fn currency(&self) -> &'a str {
        let settings: &'a Settings = self.settings;
        &settings.currency_symbol
    }

    fn service(&mut self) -> ExpenseService<'_> {
        ExpenseService::new(&mut *self.store)
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let amount = self.ask("Enter the amount: ")?;
        let category = self.ask("Enter the category (e.g., Food, Transport, Entertainment): ")?;
        let date = self.ask("Enter the date (YYYY-MM-DD) or press Enter for today: ")?;

        self.service()
            .add(ExpenseDraft::new(amount, category, date))?;
        writeln!(self.output, "Expense added!")?;
        Ok(())
    }

    fn view_summary(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "1. Total spending by category")?;
        writeln!(self.output, "2. Total overall spending")?;
        writeln!(self.output, "3. Spending by time (daily/weekly/monthly)")?;

        let currency = self.currency();
        match self.ask("Choose an option: ")?.parse::<SummaryChoice>()? {
            SummaryChoice::ByCategory => {
                let category = self.ask("Enter category: ")?;
                let total = category_total(self.store.all(), &category);
                writeln!(
                    self.output,
                    "Total spent on {}: {}",
                    category.trim(),
                    total.format_with_symbol(currency)
                )?;
            }
            SummaryChoice::Overall => {
                let total = overall_total(self.store.all());
                writeln!(
                    self.output,
                    "Total overall spending: {}",
                    total.format_with_symbol(currency)
                )?;
            }
            SummaryChoice::OverTime => self.view_spending_over_time()?,
        }
        Ok(())
    }

    fn view_spending_over_time(&mut self) -> TrackerResult<()> {
        let bucket: TimeBucket = self
            .ask("View spending by (daily/weekly/monthly): ")?
            .parse()?;

        let report = SpendingOverTime::generate(self.store.all(), bucket);
        write!(self.output, "{}", report.format_terminal(self.currency()))?;
        Ok(())
    }

    fn modify_expense(&mut self) -> TrackerResult<()> {
        let currency = self.currency();
        if self.store.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(());
        }

        write!(self.output, "{}", format_expense_list(self.store.all(), currency))?;
        let ordinal = self.ask("Enter the number of the expense to delete/edit: ")?;
        let index = self.service().select(&ordinal)?;

        let action = match ActionKind::from_input(&self.ask("Enter 'd' to delete or 'e' to edit: ")?)
        {
            ActionKind::Delete => ModifyAction::Delete,
            ActionKind::Edit => {
                let current = self.service().get(index)?.clone();
                let amount = self.ask(&format!(
                    "Enter the new amount (blank keeps {}): ",
                    current.amount.format_plain()
                ))?;
                let category = self.ask(&format!(
                    "Enter the new category (blank keeps {}): ",
                    current.category
                ))?;
                let date = self.ask(&format!(
                    "Enter the new date (YYYY-MM-DD, blank keeps {}): ",
                    current.date
                ))?;
                ModifyAction::Edit(ExpenseUpdate::from_input(&amount, &category, &date)?)
            }
            ActionKind::Other => ModifyAction::Keep,
        };

        let message = match self.service().apply(index, action)? {
            ModifyOutcome::Deleted(_) => "Expense deleted!",
            ModifyOutcome::Updated { .. } => "Expense updated!",
            ModifyOutcome::Unchanged => "No changes made.",
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn show_chart(&mut self) -> TrackerResult<()> {
        let totals = totals_by_category(self.store.all());
        if totals.is_empty() {
            writeln!(self.output, "No expenses to chart.")?;
            return Ok(());
        }

        self.chart.show(&totals, self.currency())
    }
}
