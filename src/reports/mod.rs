//! Aggregate statistics over recorded expenses
//!
//! Pure functions over an expense slice; the ledger calls into these and
//! the CLI renders the results.

pub mod category;
pub mod period;
pub mod summary;

pub use category::{category_stats, CategoryStats, CategoryTotal};
pub use period::{period_stats, PeriodStats};
pub use summary::{total_spent, FinancialSummary};
