//! CSV export of the expense list

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Export expenses as `date,category,amount` rows in entry order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "category", "amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.date.to_string(),
                expense.category.clone(),
                expense.amount.to_plain_string(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
