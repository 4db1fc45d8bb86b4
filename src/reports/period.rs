//! Spending within a date range

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Amount, Expense};

/// Totals for an inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodStats {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_spent: Amount,
    pub expense_count: usize,
}

/// Sum expenses dated within `[start, end]`. The caller checks `start <= end`.
pub fn period_stats(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> PeriodStats {
    let (total_spent, expense_count) = expenses
        .iter()
        .filter(|e| e.is_within(start, end))
        .fold((Amount::zero(), 0), |(sum, count), e| {
            (sum + e.amount, count + 1)
        });

    PeriodStats {
        start_date: start,
        end_date: end,
        total_spent,
        expense_count,
    }
}
