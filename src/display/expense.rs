//! Expense list formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, numbered in entry order
pub fn format_expense_list(expenses: &[&Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        date: e.date.to_string(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::last(), Alignment::right());
    table.to_string()
}
