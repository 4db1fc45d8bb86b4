//! YAML export for human-readable backups

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::LedgerData;

/// Export the full ledger document as YAML
pub fn export_ledger_yaml<W: Write>(data: &LedgerData, writer: &mut W) -> TrackerResult<()> {
    writeln!(writer, "# fintrack ledger export")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, data).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
