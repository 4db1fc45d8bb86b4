//! Display formatting for terminal output
//!
//! Turns ledger query results into printable text.

pub mod expense;
pub mod report;

pub use expense::format_expense_list;
pub use report::{format_category_stats, format_period_stats, format_summary};
