//! Budget vs. spending summary

use serde::Serialize;

use crate::models::{Amount, Expense};

/// Budget, total spent and what is left. `remaining` goes negative when
/// spending exceeds the budget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FinancialSummary {
    pub budget: Amount,
    pub total_spent: Amount,
    pub remaining: Amount,
}

impl FinancialSummary {
    pub fn new(budget: Amount, expenses: &[Expense]) -> Self {
        let total_spent = total_spent(expenses);
        Self {
            budget,
            total_spent,
            remaining: budget - total_spent,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Sum of all expense amounts
pub fn total_spent(expenses: &[Expense]) -> Amount {
    expenses.iter().map(|e| e.amount).sum()
}
