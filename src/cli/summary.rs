//! Summary and chart CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_category_totals;
use crate::error::TrackerResult;
use crate::models::TimeBucket;
use crate::reports::{category_total, overall_total, totals_by_category, SpendingOverTime};
use crate::storage::ExpenseStore;
use crate::tui::ChartRenderer;

/// Summary subcommands
#[derive(Subcommand, Debug)]
pub enum SummaryCommands {
    /// Total spent on one category (case-insensitive)
    Category {
        /// Category name
        name: String,
    },
    /// Total overall spending
    Total,
    /// Spending grouped by day, week or month
    Time {
        /// daily, weekly or monthly
        #[arg(default_value = "daily")]
        bucket: String,
    },
    /// Totals for every category
    Categories,
}

/// Handle a summary command
pub fn handle_summary_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: SummaryCommands,
) -> TrackerResult<()> {
    let currency = settings.currency_symbol.as_str();
    let expenses = store.all();

    match cmd {
        SummaryCommands::Category { name } => {
            let total = category_total(expenses, &name);
            println!(
                "Total spent on {}: {}",
                name.trim(),
                total.format_with_symbol(currency)
            );
        }
        SummaryCommands::Total => {
            println!(
                "Total overall spending: {}",
                overall_total(expenses).format_with_symbol(currency)
            );
        }
        SummaryCommands::Time { bucket } => {
            let bucket: TimeBucket = bucket.parse()?;
            let report = SpendingOverTime::generate(expenses, bucket);
            print!("{}", report.format_terminal(currency));
        }
        SummaryCommands::Categories => {
            print!(
                "{}",
                format_category_totals(&totals_by_category(expenses), currency)
            );
        }
    }

    Ok(())
}

/// Show the per-category bar chart
pub fn handle_chart_command(
    store: &ExpenseStore,
    settings: &Settings,
    chart: &mut dyn ChartRenderer,
) -> TrackerResult<()> {
    let totals = totals_by_category(store.all());
    if totals.is_empty() {
        println!("No expenses to chart.");
        return Ok(());
    }

    chart.show(&totals, &settings.currency_symbol)
}
