//! Expense CLI commands
//!
//! Non-interactive counterparts of the menu's add and delete/edit entries.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense, format_expense_table};
use crate::error::TrackerResult;
use crate::models::{ExpenseDraft, ExpenseUpdate};
use crate::services::{ExpenseService, ModifyAction, ModifyOutcome};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Log a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (e.g., Food, Transport, Entertainment)
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all expenses with their numbers
    #[command(alias = "ls")]
    List,
    /// Edit an expense; omitted fields keep their value
    Edit {
        /// Expense number as shown by `list`
        number: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense number as shown by `list`
        number: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let currency = settings.currency_symbol.as_str();
    let mut service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
        } => {
            let expense = service.add(ExpenseDraft::new(
                amount,
                category,
                date.unwrap_or_default(),
            ))?;
            println!("Expense added!");
            println!("  {}", format_expense(&expense, currency));
        }

        ExpenseCommands::List => {
            let expenses = service.list();
            if expenses.is_empty() {
                println!("No expenses recorded.");
            } else {
                println!("{}", format_expense_table(expenses, currency));
            }
        }

        ExpenseCommands::Edit {
            number,
            amount,
            category,
            date,
        } => {
            let index = service.select(&number)?;
            let update = ExpenseUpdate::from_input(
                amount.as_deref().unwrap_or(""),
                category.as_deref().unwrap_or(""),
                date.as_deref().unwrap_or(""),
            )?;

            let action = if update.is_empty() {
                ModifyAction::Keep
            } else {
                ModifyAction::Edit(update)
            };

            match service.apply(index, action)? {
                ModifyOutcome::Updated { before, after } => {
                    println!("Expense updated!");
                    println!("  Before: {}", format_expense(&before, currency));
                    println!("  After:  {}", format_expense(&after, currency));
                }
                _ => println!("No changes made."),
            }
        }

        ExpenseCommands::Delete { number } => {
            let index = service.select(&number)?;
            let removed = service.delete(index)?;
            println!("Expense deleted!");
            println!("  {}", format_expense(&removed, currency));
        }
    }

    for err in store.take_audit_failures() {
        println!("Warning: change saved but not written to the audit log: {}", err);
    }

    Ok(())
}
