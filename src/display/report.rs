//! Statistics formatting

use crate::reports::{CategoryStats, FinancialSummary, PeriodStats};

/// Format the budget summary block
pub fn format_summary(summary: &FinancialSummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Financial Summary\n");
    output.push_str(&format!("{}\n", "=".repeat(30)));
    output.push_str(&format!(
        "{:<14}{:>16}\n",
        "Budget:",
        summary.budget.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "{:<14}{:>16}\n",
        "Total Spent:",
        summary.total_spent.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "{:<14}{:>16}\n",
        "Remaining:",
        summary.remaining.format_with_symbol(currency_symbol)
    ));

    if summary.is_over_budget() {
        output.push_str("Over budget!\n");
    }

    output
}

/// Format spending by category with each category's share of the total
pub fn format_category_stats(stats: &CategoryStats, currency_symbol: &str) -> String {
    if stats.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let name_width = stats
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>6}  {:>7}\n",
        "Category",
        "Spent",
        "Count",
        "Share",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->6}  {:->7}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for entry in stats.iter() {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>6}  {:>6.1}%\n",
            entry.category,
            entry.total.format_with_symbol(currency_symbol),
            entry.expense_count,
            stats.percentage_of(entry),
            name_width = name_width,
        ));
    }

    output
}

/// Format the totals for a date range
pub fn format_period_stats(stats: &PeriodStats, currency_symbol: &str) -> String {
    format!(
        "From {} to {}:\nTotal spent: {}\nNumber of expenses: {}\n",
        stats.start_date,
        stats.end_date,
        stats.total_spent.format_with_symbol(currency_symbol),
        stats.expense_count
    )
}
