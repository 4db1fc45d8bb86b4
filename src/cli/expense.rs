//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::Expense;
use crate::validation::{parse_date, validate_amount};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (must be positive)
        amount: String,
        /// Category label (e.g., "Food")
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded expenses
    List {
        /// Only expenses on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Only expenses on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
        } => {
            let (is_valid, value) = validate_amount(&amount);
            if !is_valid {
                return Err(TrackerError::InvalidExpense(format!(
                    "'{}' is not a positive number",
                    amount
                )));
            }

            let expense = ledger.add_expense(value, &category, date.as_deref())?;
            println!(
                "Expense added: {} {} on {}",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category,
                expense.date
            );
        }
        ExpenseCommands::List { from, to } => {
            let expenses: Vec<&Expense> = if from.is_none() && to.is_none() {
                ledger.expenses().iter().collect()
            } else {
                let start = match from {
                    Some(text) => parse_range_bound(&text)?,
                    None => chrono::NaiveDate::MIN,
                };
                let end = match to {
                    Some(text) => parse_range_bound(&text)?,
                    None => chrono::NaiveDate::MAX,
                };
                ledger.expenses_between(start, end)?
            };

            println!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

fn parse_range_bound(text: &str) -> TrackerResult<chrono::NaiveDate> {
    parse_date(text).ok_or_else(|| {
        TrackerError::InvalidDateRange(format!("'{}' is not a valid YYYY-MM-DD date", text))
    })
}
