//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::validation::validate_amount;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the overall budget
    Set {
        /// Budget amount (e.g., "1000" or "1000.50")
        amount: String,
    },

    /// Show budget, total spent and remaining
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let (is_valid, value) = validate_amount(&amount);
            if !is_valid {
                return Err(TrackerError::InvalidBudget(format!(
                    "'{}' is not a non-negative number",
                    amount
                )));
            }

            ledger.set_budget(value)?;
            println!(
                "Budget set to: {}",
                ledger.budget().format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Show => {
            print!(
                "{}",
                format_summary(&ledger.financial_summary(), &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
