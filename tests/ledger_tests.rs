//! Ledger behaviour through the public API

use std::fs;

use fintrack::models::Amount;
use fintrack::{validate_amount, validate_date, Ledger};
use tempfile::TempDir;

fn open_fresh() -> (TempDir, Ledger) {
    let temp_dir = TempDir::new().unwrap();
    let ledger = Ledger::open(temp_dir.path().join("financial_data.json"));
    (temp_dir, ledger)
}

#[test]
fn scenario_budget_two_expenses() {
    let (_temp_dir, mut ledger) = open_fresh();

    ledger.set_budget(1000.0).unwrap();
    ledger.add_expense(50.0, "Food", Some("2024-01-15")).unwrap();
    ledger.add_expense(30.0, "Transport", Some("2024-01-16")).unwrap();

    let summary = ledger.financial_summary();
    assert_eq!(summary.budget, Amount::from(1000));
    assert_eq!(summary.total_spent, Amount::from(80));
    assert_eq!(summary.remaining, Amount::from(920));

    let categories = ledger.category_stats();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories.get("Food"), Some(Amount::from(50)));
    assert_eq!(categories.get("Transport"), Some(Amount::from(30)));

    let period = ledger.period_stats("2024-01-15", "2024-01-16").unwrap();
    assert_eq!(period.total_spent, Amount::from(80));
    assert_eq!(period.expense_count, 2);
}

#[test]
fn repeated_expense_is_appended_twice() {
    let (_temp_dir, mut ledger) = open_fresh();

    ledger.add_expense(12.5, "Food", Some("2024-03-01")).unwrap();
    assert_eq!(ledger.total_spent(), Amount::new(125, 1));

    ledger.add_expense(12.5, "Food", Some("2024-03-01")).unwrap();
    assert_eq!(ledger.total_spent(), Amount::from(25));
    assert_eq!(ledger.expenses().len(), 2);
}

#[test]
fn category_totals_sum_to_total_spent() {
    let (_temp_dir, mut ledger) = open_fresh();
    for (amount, category) in [(52.74, "A"), (65.67, "B"), (45.48, "B")] {
        ledger.add_expense(amount, category, Some("2024-05-05")).unwrap();
    }

    assert_eq!(ledger.total_spent(), Amount::new(16389, 2));
    assert_eq!(ledger.category_stats().total(), ledger.total_spent());
    assert_eq!(ledger.category_stats().get("B"), Some(Amount::new(11115, 2)));
}

#[test]
fn empty_period_is_zero_not_error() {
    let (_temp_dir, mut ledger) = open_fresh();
    ledger.add_expense(10.0, "Food", Some("2024-01-15")).unwrap();

    let stats = ledger.period_stats("2024-06-01", "2024-06-01").unwrap();
    assert!(stats.total_spent.is_zero());
    assert_eq!(stats.expense_count, 0);
}

#[test]
fn reversed_period_is_rejected() {
    let (_temp_dir, ledger) = open_fresh();
    let err = ledger.period_stats("2024-02-01", "2024-01-01").unwrap_err();
    assert!(err.is_invalid_date_range());
}

#[test]
fn negative_budget_is_rejected_without_change() {
    let (_temp_dir, mut ledger) = open_fresh();
    ledger.set_budget(300.0).unwrap();

    let err = ledger.set_budget(-1.0).unwrap_err();
    assert!(err.is_invalid_budget());
    assert_eq!(ledger.financial_summary().budget, Amount::from(300));

    let reopened = Ledger::open(ledger.path());
    assert_eq!(reopened.budget(), Amount::from(300));
}

#[test]
fn zero_expense_rejected_but_zero_amount_validates() {
    let (_temp_dir, mut ledger) = open_fresh();

    let err = ledger.add_expense(0.0, "Food", None).unwrap_err();
    assert!(err.is_invalid_expense());
    assert_eq!(validate_amount("0"), (true, 0.0));
}

#[test]
fn over_budget_remaining_is_negative() {
    let (_temp_dir, mut ledger) = open_fresh();
    ledger.set_budget(20.0).unwrap();
    ledger.add_expense(35.0, "Food", Some("2024-01-15")).unwrap();

    let summary = ledger.financial_summary();
    assert_eq!(summary.remaining, Amount::from(-15));
    assert!(summary.is_over_budget());
}

#[test]
fn reopen_reproduces_state_in_order() {
    let (_temp_dir, mut ledger) = open_fresh();
    ledger.set_budget(500.0).unwrap();
    ledger.add_expense(9.99, "Books", Some("2024-04-02")).unwrap();
    ledger.add_expense(3.0, "Coffee", Some("2024-01-01")).unwrap();
    ledger.add_expense(120.0, "Rent", Some("2024-02-29")).unwrap();

    let reopened = Ledger::open(ledger.path());
    assert_eq!(reopened.data(), ledger.data());

    let categories: Vec<&str> = reopened
        .expenses()
        .iter()
        .map(|e| e.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Books", "Coffee", "Rent"]);
}

#[test]
fn persisted_document_has_fixed_layout() {
    let (_temp_dir, mut ledger) = open_fresh();
    ledger.set_budget(1000.0).unwrap();
    ledger.add_expense(50.0, " Food ", Some("2024-01-15")).unwrap();

    let contents = fs::read_to_string(ledger.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "budget": 1000.0,
            "expenses": [
                {"amount": 50.0, "category": "Food", "date": "2024-01-15"}
            ]
        })
    );
}

#[test]
fn truncated_file_loads_default_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("financial_data.json");
    fs::write(&path, r#"{"budget": 1000.0, "expenses": [{"amount": 50.0, "cat"#).unwrap();

    let ledger = Ledger::open(&path);
    assert!(ledger.budget().is_zero());
    assert!(ledger.expenses().is_empty());
}

#[test]
fn empty_file_loads_default_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("financial_data.json");
    fs::write(&path, "").unwrap();

    let mut ledger = Ledger::open(&path);
    assert!(ledger.budget().is_zero());

    ledger.set_budget(10.0).unwrap();
    assert_eq!(Ledger::open(&path).budget(), Amount::from(10));
}

#[test]
fn wrong_shape_loads_default_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("financial_data.json");
    fs::write(&path, r#"[1, 2, 3]"#).unwrap();

    let ledger = Ledger::open(&path);
    assert!(ledger.budget().is_zero());
    assert!(ledger.expenses().is_empty());
}

#[test]
fn date_validation_handles_leap_years() {
    assert!(validate_date("2024-02-29"));
    assert!(!validate_date("2023-02-29"));
    assert!(validate_date("2000-02-29"));
    assert!(!validate_date("1900-02-29"));
    assert!(!validate_date("2024-04-31"));
}
