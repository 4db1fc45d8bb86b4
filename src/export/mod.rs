//! Export functionality for fintrack
//!
//! Writes the ledger out as CSV (expenses only), JSON or YAML (whole document).

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use crate::config::ExportFormat;
use crate::error::TrackerResult;
use crate::models::LedgerData;

pub use self::csv::export_expenses_csv;
pub use self::json::export_ledger_json;
pub use self::yaml::export_ledger_yaml;

/// Export the ledger in the requested format
pub fn export_ledger<W: Write>(
    data: &LedgerData,
    format: ExportFormat,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(&data.expenses, writer),
        ExportFormat::Json => export_ledger_json(data, writer),
        ExportFormat::Yaml => export_ledger_yaml(data, writer),
    }
}
