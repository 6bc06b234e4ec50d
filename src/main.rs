use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_add, handle_budget_set, handle_budget_show, handle_delete, handle_list,
    handle_notifications, handle_report, ConsoleNotifier,
};
use fintrack::config::DataPaths;
use fintrack::models::{Category, TransactionType};
use fintrack::reports::ReportKind;
use fintrack::services::{Ledger, NotificationLogger};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income/expense tracker with monthly budget alerts",
    long_about = "fintrack records income and expense transactions, warns when \
                  the current month's spending crosses the configured budget, \
                  and produces daily, monthly, and yearly reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new transaction
    Add {
        /// Amount in Rupiah (positive)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Transaction type (income or expense)
        #[arg(value_name = "TYPE")]
        kind: TransactionType,
        /// Category (salary, food, transport, bills, entertainment, health,
        /// education, shopping, investment, other)
        category: Category,
        /// Description (a placeholder is used when omitted)
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: String,
    },

    /// List transactions, optionally filtered
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<Category>,
        /// Earliest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Generate a report
    Report {
        /// Report kind (daily, monthly, or yearly)
        kind: ReportKind,
    },

    /// Show recent budget notifications
    Notifications {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Budget amount in Rupiah (non-negative)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Show the budget and current month spending
    Show,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = DataPaths::new();
    let storage = Storage::new(paths.clone())?;
    let notification_log = storage.notifications.clone();
    let mut ledger = Ledger::new(storage);

    // Budget warnings go to the terminal and to the append-only log
    ledger.subscribe(Box::new(ConsoleNotifier));
    ledger.subscribe(Box::new(NotificationLogger::new(notification_log.clone())));

    match cli.command {
        Commands::Add {
            amount,
            kind,
            category,
            description,
            date,
        } => handle_add(&mut ledger, amount, kind, category, description, date)?,
        Commands::Delete { id } => handle_delete(&mut ledger, &id)?,
        Commands::List { category, from, to } => handle_list(&ledger, category, from, to)?,
        Commands::Budget(BudgetCommands::Set { amount }) => handle_budget_set(&mut ledger, amount)?,
        Commands::Budget(BudgetCommands::Show) => handle_budget_show(&ledger)?,
        Commands::Report { kind } => handle_report(&ledger, kind)?,
        Commands::Notifications { limit } => handle_notifications(&notification_log, limit)?,
        Commands::Config => {
            println!("Data directory: {}", paths.data_dir().display());
            println!("Transactions: {}", paths.transactions_file().display());
            println!("Budget: {}", paths.budget_file().display());
            println!("Notifications: {}", paths.notifications_file().display());
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
