//! Spending by category
//!
//! Categories are listed in the order they were first recorded.

use serde::Serialize;

use crate::models::{Amount, Expense};

/// Sum of all expenses sharing one category label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
    pub expense_count: usize,
}

/// Per-category totals, one entry per distinct category
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryStats {
    entries: Vec<CategoryTotal>,
}

impl CategoryStats {
    /// Total for a category, if any expense used it
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories (equals the ledger's total spent)
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Share of the overall total, in percent
    pub fn percentage_of(&self, entry: &CategoryTotal) -> f64 {
        let total = self.total();
        if total.is_zero() {
            0.0
        } else {
            entry.total.to_f64() / total.to_f64() * 100.0
        }
    }
}

/// Group expenses by category, keeping first-seen order
pub fn category_stats(expenses: &[Expense]) -> CategoryStats {
    let mut entries: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match entries.iter_mut().find(|e| e.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.expense_count += 1;
            }
            None => entries.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
                expense_count: 1,
            }),
        }
    }

    CategoryStats { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: f64, category: &str) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Expense::new(Amount::from_f64(amount).unwrap(), category, date)
    }

    #[test]
    fn test_empty() {
        let stats = category_stats(&[]);
        assert!(stats.is_empty());
        assert!(stats.total().is_zero());
    }

    #[test]
    fn test_groups_and_sums() {
        let expenses = vec![
            expense(50.0, "Food"),
            expense(20.0, "Transport"),
            expense(30.0, "Food"),
        ];
        let stats = category_stats(&expenses);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("Food"), Some(Amount::from(80)));
        assert_eq!(stats.get("Transport"), Some(Amount::from(20)));
        assert_eq!(stats.get("Rent"), None);
        assert_eq!(stats.total(), Amount::from(100));
    }

    #[test]
    fn test_first_seen_order() {
        let expenses = vec![
            expense(1.0, "Transport"),
            expense(1.0, "Food"),
            expense(1.0, "Transport"),
        ];
        let names: Vec<_> = category_stats(&expenses)
            .iter()
            .map(|e| e.category.clone())
            .collect();
        assert_eq!(names, vec!["Transport", "Food"]);
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let stats = category_stats(&[expense(1.0, "food"), expense(2.0, "Food")]);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_percentage() {
        let stats = category_stats(&[expense(75.0, "Food"), expense(25.0, "Transport")]);
        let food = stats.iter().next().unwrap();
        assert_eq!(stats.percentage_of(food), 75.0);
    }
}
