//! CSV export commands.

use crate::input::read_records;
use anyhow::Context;
use log::info;
use std::fs;
use std::path::Path;
use tsa_core::{csv_data_uri, csv_payload};

/// Write the CSV payload for `input` to `output`.
pub fn run_export(input: &Path, output: &Path) -> anyhow::Result<()> {
    let records = read_records(input)?;
    let payload = csv_payload(&records)
        .with_context(|| format!("Nothing to export from {}", input.display()))?;

    fs::write(output, payload)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Exported {} records to {}", records.len(), output.display());
    Ok(())
}

/// Print the download URI for `input` to stdout.
pub fn run_data_uri(input: &Path) -> anyhow::Result<()> {
    let records = read_records(input)?;
    let uri = csv_data_uri(&records)
        .with_context(|| format!("Nothing to export from {}", input.display()))?;
    println!("{}", uri);
    Ok(())
}
