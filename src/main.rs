use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_stats_command,
    BudgetCommands, ExpenseCommands, ExportArgs, StatsCommands,
};
use fintrack::config::{Settings, TrackerPaths};
use fintrack::{Ledger, TrackerError};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track a budget and your expenses from the terminal",
    long_about = "fintrack records a budget and dated, categorized expenses in a local \
                  JSON file and reports totals, per-category and per-period spending."
)]
struct Cli {
    /// Data file to use instead of the default location
    #[arg(short, long, global = true, env = "FINTRACK_DATA_FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Spending statistics
    #[command(subcommand)]
    Stats(StatsCommands),

    /// Export the ledger
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

/// Exit status for rejected input (bad amount, date or range)
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    fintrack::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let invalid_input = err
                .downcast_ref::<TrackerError>()
                .is_some_and(TrackerError::is_validation);
            if invalid_input {
                ExitCode::from(EXIT_INVALID_INPUT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = TrackerPaths::resolve(cli.file)?;
    let settings = Settings::load_or_create(&paths)?;
    let mut ledger = Ledger::open_with_clock(paths.data_file(), settings.date_clock);

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Stats(cmd)) => handle_stats_command(&ledger, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&ledger, &settings, args)?,
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("fintrack Configuration");
            println!("======================");
            println!("Data file:     {}", paths.data_file().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date clock:      {:?}", settings.date_clock);
            println!("  Export format:   {:?}", settings.default_export_format);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}
