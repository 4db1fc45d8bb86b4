//! fintrack - personal finance tracker
//!
//! Records a budget and a list of dated, categorized expenses in a local
//! JSON file and computes aggregate statistics over them.
//!
//! # Architecture
//!
//! - `config`: Data file location and user settings
//! - `error`: Custom error types
//! - `models`: Amounts, expenses and the persisted document
//! - `validation`: Input checks for amounts, categories and dates
//! - `storage`: Lenient JSON loading and atomic writes
//! - `ledger`: The write-through ledger and its queries
//! - `reports`: Aggregations (totals, per-category, per-period)
//! - `display`, `export`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use fintrack::models::Amount;
//! use fintrack::Ledger;
//!
//! let mut ledger = Ledger::open("financial_data.json");
//! ledger.set_budget(1000.0)?;
//! ledger.add_expense(50.0, "Food", Some("2024-01-15"))?;
//! assert_eq!(ledger.financial_summary().remaining, Amount::from(950));
//! # Ok::<(), fintrack::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validation;

use std::sync::Once;

pub use error::{TrackerError, TrackerResult};
pub use ledger::Ledger;
pub use validation::{validate_amount, validate_date};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, filtered by `RUST_LOG`)
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default_level = if verbose { "fintrack=debug" } else { "fintrack=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
