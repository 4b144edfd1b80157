use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cash_calculator::cli::{
    handle_count_command, handle_expected_command, handle_filter_command,
    handle_preference_command, CountCommands, ExpectedCommands, FilterCommands,
    PreferenceCommands,
};
use cash_calculator::config::paths::{CashPaths, DATA_DIR_ENV};
use cash_calculator::display::{format_denomination_table, format_summary};
use cash_calculator::services::Session;
use cash_calculator::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CASHCALC_LOG";

#[derive(Parser)]
#[command(
    name = "cashcalc",
    version,
    about = "Cash drawer counting and reconciliation",
    long_about = "Count the notes and coins in a cash drawer, compare the total with \
                  the amount it should contain, and see whether it balances. Counts, \
                  the expected amount and display filters are kept between runs."
)]
struct Cli {
    /// Directory holding settings.json and calculation.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Denomination counts
    #[command(subcommand)]
    Count(CountCommands),

    /// Expected amount
    #[command(subcommand)]
    Expected(ExpectedCommands),

    /// Denomination visibility
    #[command(subcommand)]
    Filter(FilterCommands),

    /// Show total, expected amount, difference and status
    Summary,

    /// List denominations with counts and line totals
    List {
        /// Include hidden denominations
        #[arg(short, long)]
        all: bool,
    },

    /// Print the count report (non-empty denominations and the total)
    Report,

    /// Reset all counts and the expected amount; filters are kept
    Clear,

    /// Show or change preferences
    #[command(subcommand)]
    Config(PreferenceCommands),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => CashPaths::with_base_dir(dir),
        None => CashPaths::new()?,
    };
    let storage = Storage::new(paths.clone())?;

    let mut session = Session::startup(&storage);
    let symbol = session.preferences().currency_symbol.clone();

    match cli.command {
        Some(Commands::Count(cmd)) => handle_count_command(&mut session, cmd)?,
        Some(Commands::Expected(cmd)) => handle_expected_command(&mut session, cmd)?,
        Some(Commands::Filter(cmd)) => handle_filter_command(&mut session, cmd)?,
        Some(Commands::Summary) | None => {
            print!("{}", format_summary(&session.summary(), &symbol));
        }
        Some(Commands::List { all }) => {
            let denominations = if all {
                session.register().denominations().to_vec()
            } else {
                session.visible_denominations()
            };
            println!("{}", format_denomination_table(&denominations));
            println!();
            print!("{}", format_summary(&session.summary(), &symbol));
        }
        Some(Commands::Report) => {
            println!("{}", session.report());
        }
        Some(Commands::Clear) => {
            let summary = session.clear();
            println!("Counts and expected amount cleared.");
            println!();
            print!("{}", format_summary(&summary, &symbol));
        }
        Some(Commands::Config(cmd)) => handle_preference_command(&mut session, &paths, cmd)?,
    }

    session
        .shutdown(&storage)
        .with_context(|| format!("Failed to save state in {}", paths.base_dir().display()))?;

    Ok(())
}
