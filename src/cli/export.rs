//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::{ExportFormat, Settings};
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_ledger;
use crate::ledger::Ledger;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    ledger: &Ledger,
    settings: &Settings,
    args: ExportArgs,
) -> TrackerResult<()> {
    let format = args.format.unwrap_or(settings.default_export_format);

    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                TrackerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_ledger(ledger.data(), format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            eprintln!("Ledger exported to: {}", output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_ledger(ledger.data(), format, &mut writer)?;
        }
    }

    Ok(())
}
