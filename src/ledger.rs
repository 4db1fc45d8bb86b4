//! The ledger: budget plus expense history, persisted on every change
//!
//! Every mutation runs validate -> mutate in memory -> write the whole
//! document. If the write fails the in-memory change is reverted, so memory
//! and disk never disagree.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::DateClock;
use crate::error::TrackerResult;
use crate::models::{Amount, Expense, LedgerData};
use crate::reports::{self, CategoryStats, FinancialSummary, PeriodStats};
use crate::storage::{read_json_lenient, write_json_atomic, LoadOutcome};
use crate::validation;

/// Budget and expenses backed by a JSON file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    data: LedgerData,
    clock: DateClock,
}

impl Ledger {
    /// Open the ledger stored at `path`, using the UTC calendar for undated
    /// expenses.
    ///
    /// Never fails: a missing, empty, corrupt or invariant-violating file
    /// starts the ledger from `{budget: 0, expenses: []}`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, DateClock::Utc)
    }

    /// Open the ledger with an explicit clock for undated expenses
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: DateClock) -> Self {
        let path = path.into();
        let data = load_data(&path);
        Self { path, data, clock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn budget(&self) -> Amount {
        self.data.budget
    }

    /// Expenses in the order they were entered
    pub fn expenses(&self) -> &[Expense] {
        &self.data.expenses
    }

    pub fn data(&self) -> &LedgerData {
        &self.data
    }

    /// Overwrite the budget
    pub fn set_budget(&mut self, value: f64) -> TrackerResult<()> {
        let budget = validation::check_budget(value)?;

        let previous = std::mem::replace(&mut self.data.budget, budget);
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist budget, rolling back");
            self.data.budget = previous;
            return Err(e);
        }

        info!(budget = %budget, "budget set");
        Ok(())
    }

    /// Append an expense. Without a date the configured clock's current
    /// calendar date is used.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: &str,
        date: Option<&str>,
    ) -> TrackerResult<Expense> {
        let amount = validation::check_expense_amount(amount)?;
        let category = validation::normalize_category(category)?;
        let date = match date {
            Some(text) => validation::check_expense_date(text)?,
            None => self.clock.today(),
        };

        let expense = Expense::new(amount, category, date);
        self.data.expenses.push(expense.clone());

        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist expense, rolling back");
            self.data.expenses.pop();
            return Err(e);
        }

        info!(
            amount = %expense.amount,
            category = %expense.category,
            date = %expense.date,
            "expense added"
        );
        Ok(expense)
    }

    /// Sum of every expense amount
    pub fn total_spent(&self) -> Amount {
        reports::total_spent(&self.data.expenses)
    }

    /// Spending per category
    pub fn category_stats(&self) -> CategoryStats {
        reports::category_stats(&self.data.expenses)
    }

    /// Spending between two `YYYY-MM-DD` dates, both inclusive
    pub fn period_stats(&self, start: &str, end: &str) -> TrackerResult<PeriodStats> {
        let (start, end) = validation::check_date_range(start, end)?;
        self.period_stats_between(start, end)
    }

    /// Typed form of [`Ledger::period_stats`]
    pub fn period_stats_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TrackerResult<PeriodStats> {
        validation::check_date_order(start, end)?;
        Ok(reports::period_stats(&self.data.expenses, start, end))
    }

    /// Expenses dated within `[start, end]`, in entry order
    pub fn expenses_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TrackerResult<Vec<&Expense>> {
        validation::check_date_order(start, end)?;
        Ok(self
            .data
            .expenses
            .iter()
            .filter(|e| e.is_within(start, end))
            .collect())
    }

    pub fn financial_summary(&self) -> FinancialSummary {
        FinancialSummary::new(self.data.budget, &self.data.expenses)
    }

    fn persist(&self) -> TrackerResult<()> {
        debug!(path = %self.path.display(), "writing ledger");
        write_json_atomic(&self.path, &self.data)
    }
}

fn load_data(path: &Path) -> LedgerData {
    match read_json_lenient::<LedgerData, _>(path) {
        LoadOutcome::Loaded(data) => match data.validate() {
            Ok(()) => {
                debug!(
                    path = %path.display(),
                    expenses = data.expenses.len(),
                    "ledger loaded"
                );
                data
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ledger invalid, starting empty");
                LedgerData::default()
            }
        },
        LoadOutcome::Missing => {
            debug!(path = %path.display(), "no ledger found, starting empty");
            LedgerData::default()
        }
        LoadOutcome::Corrupt(reason) => {
            warn!(path = %path.display(), %reason, "ledger unreadable, starting empty");
            LedgerData::default()
        }
    }
}
