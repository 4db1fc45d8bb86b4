//! Expense model
//!
//! One recorded spending event. Dates are held as `NaiveDate` and only
//! become `YYYY-MM-DD` text at the serialization boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (always positive)
    pub amount: Amount,

    /// Trimmed, non-empty category label
    pub category: String,

    /// Calendar date the money was spent
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense, trimming the category
    pub fn new(amount: Amount, category: impl Into<String>, date: NaiveDate) -> Self {
        let category = category.into();
        Self {
            amount,
            category: category.trim().to_string(),
            date,
        }
    }

    /// Check if the expense falls within the inclusive range `[start, end]`
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }

    /// Validate the expense invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::BlankCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Amount),
    BlankCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount.to_plain_string())
            }
            Self::BlankCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_trims_category() {
        let expense = Expense::new(Amount::from(12), "  Food \t", date("2024-01-15"));
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_is_within_inclusive() {
        let expense = Expense::new(Amount::from(12), "Food", date("2024-01-15"));
        assert!(expense.is_within(date("2024-01-15"), date("2024-01-15")));
        assert!(expense.is_within(date("2024-01-01"), date("2024-01-31")));
        assert!(!expense.is_within(date("2024-01-16"), date("2024-01-31")));
    }

    #[test]
    fn test_validation() {
        let ok = Expense::new(Amount::from(1), "Food", date("2024-01-15"));
        assert!(ok.validate().is_ok());

        let zero = Expense::new(Amount::zero(), "Food", date("2024-01-15"));
        assert!(matches!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let blank = Expense::new(Amount::from(1), "   ", date("2024-01-15"));
        assert_eq!(blank.validate(), Err(ExpenseValidationError::BlankCategory));
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::new(Amount::from(50), "Food", date("2024-01-15"));
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"amount": 50.0, "category": "Food", "date": "2024-01-15"})
        );
    }
}
