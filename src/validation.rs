//! Input validation helpers
//!
//! `validate_amount` and `validate_date` are pre-checks for user input and
//! report invalidity as a boolean. The `check_*` functions are the strict
//! rules the ledger enforces before mutating state.
//!
//! Note the two paths disagree at zero: `validate_amount("0")` is valid,
//! while an expense of `0` is rejected by `check_expense_amount`.

use chrono::{Datelike, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Amount;

/// Date format used for input and for the persisted document
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `text` as a number. Returns `(true, value)` if it parses to a
/// finite value `>= 0`, otherwise `(false, 0.0)`.
///
/// # Examples
/// ```
/// use fintrack::validation::validate_amount;
/// assert_eq!(validate_amount("50.5"), (true, 50.5));
/// assert_eq!(validate_amount("0"), (true, 0.0));
/// assert_eq!(validate_amount("-1"), (false, 0.0));
/// ```
pub fn validate_amount(text: &str) -> (bool, f64) {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => (true, value),
        _ => (false, 0.0),
    }
}

/// Check whether `text` is a real `YYYY-MM-DD` calendar date
pub fn validate_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible days (Feb 30, month 13, ...)
/// and years before 1.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Budget must be finite and non-negative
pub fn check_budget(value: f64) -> TrackerResult<Amount> {
    if !value.is_finite() {
        return Err(TrackerError::InvalidBudget(format!(
            "{} is not a valid number",
            value
        )));
    }
    if value < 0.0 {
        return Err(TrackerError::InvalidBudget(format!(
            "budget cannot be negative, got {}",
            value
        )));
    }
    Amount::from_f64(value)
        .ok_or_else(|| TrackerError::InvalidBudget(format!("{} is out of range", value)))
}

/// Expense amounts must be finite and strictly positive
pub fn check_expense_amount(value: f64) -> TrackerResult<Amount> {
    if !value.is_finite() {
        return Err(TrackerError::InvalidExpense(format!(
            "{} is not a valid amount",
            value
        )));
    }
    if value <= 0.0 {
        return Err(TrackerError::InvalidExpense(format!(
            "amount must be positive, got {}",
            value
        )));
    }
    Amount::from_f64(value)
        .filter(Amount::is_positive)
        .ok_or_else(|| TrackerError::InvalidExpense(format!("{} is out of range", value)))
}

/// Trim a category label, rejecting blank ones
pub fn normalize_category(category: &str) -> TrackerResult<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidExpense(
            "category cannot be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse an expense date, mapping failures to `InvalidExpense`
pub fn check_expense_date(text: &str) -> TrackerResult<NaiveDate> {
    parse_date(text).ok_or_else(|| {
        TrackerError::InvalidExpense(format!("'{}' is not a valid YYYY-MM-DD date", text))
    })
}

/// Parse both ends of a period query and check their order
pub fn check_date_range(start: &str, end: &str) -> TrackerResult<(NaiveDate, NaiveDate)> {
    let start_date = parse_date(start).ok_or_else(|| {
        TrackerError::InvalidDateRange(format!("'{}' is not a valid YYYY-MM-DD date", start))
    })?;
    let end_date = parse_date(end).ok_or_else(|| {
        TrackerError::InvalidDateRange(format!("'{}' is not a valid YYYY-MM-DD date", end))
    })?;
    check_date_order(start_date, end_date)?;
    Ok((start_date, end_date))
}

pub fn check_date_order(start: NaiveDate, end: NaiveDate) -> TrackerResult<()> {
    if start > end {
        return Err(TrackerError::InvalidDateRange(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok(())
}
