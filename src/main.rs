use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_chart_command, handle_export_command, handle_expense_command, handle_history_command,
    handle_summary_command, ExpenseCommands, Menu, SummaryCommands,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::ExpenseStore;
use expense_tracker::tui::TerminalChart;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Log daily expenses to a local JSON file, then review spending \
                  by category, in total or over time, and as a bar chart. Run \
                  without a command for the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.json (defaults to the current directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Spending summaries
    #[command(subcommand)]
    Summary(SummaryCommands),

    /// Show spending by category as a bar chart
    Chart,

    /// Export expenses as CSV
    Export {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        /// Currency symbol printed before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Record changes in the audit log (true/false)
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new(cli.data_dir)?;
    let mut settings = Settings::load_or_create(&paths)?;

    // A corrupt data file stops here, before any command runs
    let mut store = ExpenseStore::open(&paths, &settings)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut chart = TerminalChart;
            let stdin = io::stdin();
            Menu::new(
                &mut store,
                &settings,
                &mut chart,
                stdin.lock(),
                io::stdout(),
            )
            .run()?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Summary(cmd)) => {
            handle_summary_command(&store, &settings, cmd)?;
        }
        Some(Commands::Chart) => {
            handle_chart_command(&store, &settings, &mut TerminalChart)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&store, output)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&paths, limit)?;
        }
        Some(Commands::Config { currency, audit }) => {
            let changed = currency.is_some() || audit.is_some();
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(enabled) = audit {
                settings.audit_enabled = enabled;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}
