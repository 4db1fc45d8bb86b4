//! Persisted ledger document
//!
//! `{"budget": <number>, "expenses": [...]}`. Field names are fixed so the
//! file stays readable by other tools.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::expense::{Expense, ExpenseValidationError};

/// The full `{budget, expenses}` state owned by a ledger
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerData {
    pub budget: Amount,
    pub expenses: Vec<Expense>,
}

impl LedgerData {
    /// Check the invariants a loaded document must hold
    pub fn validate(&self) -> Result<(), LedgerDataError> {
        if self.budget.is_negative() {
            return Err(LedgerDataError::InvalidBudget(self.budget));
        }

        for (index, expense) in self.expenses.iter().enumerate() {
            expense
                .validate()
                .map_err(|source| LedgerDataError::InvalidExpense { index, source })?;
        }

        Ok(())
    }
}

/// Reasons a parsed document is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerDataError {
    #[error("budget must be a non-negative number, got {}", .0.to_plain_string())]
    InvalidBudget(Amount),

    #[error("expense #{index} is invalid: {source}")]
    InvalidExpense {
        index: usize,
        source: ExpenseValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_is_empty() {
        let data = LedgerData::default();
        assert!(data.budget.is_zero());
        assert!(data.expenses.is_empty());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "budget": 1000.0,
            "expenses": [
                {"amount": 50.0, "category": "Food", "date": "2024-01-15"}
            ]
        }"#;
        let data: LedgerData = serde_json::from_str(json).unwrap();
        assert_eq!(data.budget, Amount::from(1000));
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(
            data.expenses[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_missing_fields_fail_to_parse() {
        assert!(serde_json::from_str::<LedgerData>(r#"{"budget": 10}"#).is_err());
        assert!(serde_json::from_str::<LedgerData>(r#"{"expenses": []}"#).is_err());
    }

    #[test]
    fn test_rejects_bad_dates() {
        let json = r#"{"budget": 0, "expenses": [
            {"amount": 5, "category": "Food", "date": "2024-02-30"}
        ]}"#;
        assert!(serde_json::from_str::<LedgerData>(json).is_err());
    }

    #[test]
    fn test_validate_negative_budget() {
        let data = LedgerData {
            budget: Amount::from(-1),
            expenses: Vec::new(),
        };
        assert!(matches!(
            data.validate(),
            Err(LedgerDataError::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_validate_reports_expense_index() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let data = LedgerData {
            budget: Amount::from(10),
            expenses: vec![
                Expense::new(Amount::from(5), "Food", date),
                Expense::new(Amount::from(-5), "Food", date),
            ],
        };
        assert!(matches!(
            data.validate(),
            Err(LedgerDataError::InvalidExpense { index: 1, .. })
        ));
    }
}
