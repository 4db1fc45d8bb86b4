//! Statistics CLI commands

use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_category_stats, format_period_stats, format_summary};
use crate::error::TrackerResult;
use crate::ledger::Ledger;

/// Statistics subcommands
#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// Budget, total spent and remaining
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Spending per category
    Categories {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Spending within a date range (inclusive)
    Period {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD), defaults to today
        end: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Handle a stats command
pub fn handle_stats_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: StatsCommands,
) -> TrackerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        StatsCommands::Summary { json } => {
            let summary = ledger.financial_summary();
            if json {
                print_json(&summary)?;
            } else {
                print!("{}", format_summary(&summary, symbol));
            }
        }
        StatsCommands::Categories { json } => {
            let stats = ledger.category_stats();
            if json {
                print_json(&stats)?;
            } else {
                println!("Spending by Category");
                print!("{}", format_category_stats(&stats, symbol));
            }
        }
        StatsCommands::Period { start, end, json } => {
            let end = end.unwrap_or_else(|| settings.date_clock.today().to_string());
            let stats = ledger.period_stats(&start, &end)?;
            if json {
                print_json(&stats)?;
            } else {
                print!("{}", format_period_stats(&stats, symbol));
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> TrackerResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
