//! CLI command handlers
//!
//! Bridges the clap argument parsing with the ledger.

pub mod budget;
pub mod expense;
pub mod export;
pub mod stats;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use stats::{handle_stats_command, StatsCommands};
