use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use loon_budget::cli::{
    handle_bucket_command, handle_paycheck_command, BucketCommands, PaycheckCommands,
};
use loon_budget::config::LoonPaths;
use loon_budget::display::{format_budget_summary, format_income};
use loon_budget::error::BudgetError;
use loon_budget::models::{BudgetState, Money, PaycheckType};
use loon_budget::services::summarize;
use loon_budget::storage::{FileStore, StateStore};

#[derive(Parser)]
#[command(
    name = "loon",
    version,
    about = "Paycheck-cycle bucket budgeting for the command line",
    long_about = "Loon Budget organizes spending into buckets, each funded by one of \
                  two paycheck cycles (mid-month and end-of-month), and shows how much \
                  of each paycheck is allocated, assigned, and left over."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bucket management commands
    #[command(subcommand)]
    Bucket(BucketCommands),

    /// Paycheck management commands
    #[command(subcommand, alias = "pay")]
    Paycheck(PaycheckCommands),

    /// Show or set the expected income per paycheck cycle
    Income {
        /// Expected mid-month deposit
        #[arg(long)]
        mid: Option<String>,
        /// Expected end-of-month deposit
        #[arg(long)]
        end: Option<String>,
    },

    /// Show the per-paycheck budget summary
    Summary,

    /// Delete all budget data
    Reset {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn parse_amount(s: &str) -> Result<Money, BudgetError> {
    Money::parse(s).map_err(|e| BudgetError::Validation(e.to_string()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let paths = LoonPaths::new()?;

    // Persistence is best-effort: with no usable data directory the session
    // still runs, it just starts empty and keeps changes in memory.
    let store = match FileStore::open(paths.data_dir()) {
        Ok(file_store) => StateStore::new(file_store),
        Err(e) => {
            warn!("Storage unavailable, changes will not persist: {}", e);
            StateStore::unavailable()
        }
    };

    let mut state = store.load().unwrap_or_else(BudgetState::new);

    match cli.command {
        Some(Commands::Bucket(cmd)) => {
            handle_bucket_command(&mut state, &store, cmd)?;
        }
        Some(Commands::Paycheck(cmd)) => {
            handle_paycheck_command(&mut state, &store, cmd)?;
        }
        Some(Commands::Income { mid, end }) => {
            if mid.is_none() && end.is_none() {
                print!("{}", format_income(&state));
            } else {
                if let Some(mid) = mid {
                    state.set_expected_amount(PaycheckType::MidMonth, parse_amount(&mid)?);
                }
                if let Some(end) = end {
                    state.set_expected_amount(PaycheckType::EndOfMonth, parse_amount(&end)?);
                }
                store.save(&state);
                print!("{}", format_income(&state));
            }
        }
        Some(Commands::Summary) => {
            let summaries: Vec<_> = PaycheckType::all()
                .iter()
                .map(|t| summarize(&state, *t))
                .collect();
            print!("{}", format_budget_summary(&state, &summaries));
        }
        Some(Commands::Reset { yes }) => {
            if yes {
                store.clear();
                println!("Budget data cleared.");
            } else {
                println!("This deletes all buckets, paychecks, and income settings.");
                println!("Re-run with --yes to confirm.");
            }
        }
        Some(Commands::Config) => {
            println!("Loon Budget Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("State file:     {}", paths.state_file().display());
            println!(
                "Persistence:    {}",
                if store.is_available() {
                    "available"
                } else {
                    "unavailable (in-memory only)"
                }
            );
        }
        None => {
            println!("Loon Budget - paycheck-cycle bucket budgeting");
            println!();
            println!("Run 'loon --help' for usage information.");
            println!("Run 'loon summary' to see the budget.");
        }
    }

    Ok(())
}
