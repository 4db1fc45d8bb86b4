//! JSON export in the same layout as the data file

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::LedgerData;

/// Export the full ledger document as pretty-printed JSON
pub fn export_ledger_json<W: Write>(data: &LedgerData, writer: &mut W) -> TrackerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, data)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
