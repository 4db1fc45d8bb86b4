//! Core data models for fintrack
//!
//! - `Amount`: decimal currency value
//! - `Expense`: one dated, categorized spending event
//! - `LedgerData`: the persisted `{budget, expenses}` document

pub mod amount;
pub mod expense;
pub mod ledger_data;

pub use amount::Amount;
pub use expense::{Expense, ExpenseValidationError};
pub use ledger_data::{LedgerData, LedgerDataError};
