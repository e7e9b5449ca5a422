//! Reading export rows from JSON or CSV files.

use anyhow::Context;
use std::fs;
use std::path::Path;
use tsa_core::{analyses_to_records, Analysis, Record, Scalar};

/// Read records from `path`.
///
/// `.csv` files are read with their header row as column names; anything
/// else is parsed as JSON, first as a list of analyses, then as a list of
/// plain objects.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        records_from_csv(&text).with_context(|| format!("Failed to parse CSV {}", path.display()))
    } else {
        records_from_json(&text).with_context(|| format!("Failed to parse JSON {}", path.display()))
    }
}

/// Read a JSON list of analyses from `path`.
pub fn read_analyses(path: &Path) -> anyhow::Result<Vec<Analysis>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON list of analyses", path.display()))
}

pub fn records_from_json(text: &str) -> anyhow::Result<Vec<Record>> {
    if let Ok(analyses) = serde_json::from_str::<Vec<Analysis>>(text) {
        return Ok(analyses_to_records(&analyses));
    }
    serde_json::from_str::<Vec<Record>>(text)
        .context("expected a JSON list of analyses or of flat objects")
}

pub fn records_from_csv(text: &str) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    reader
        .records()
        .map(|row| -> anyhow::Result<Record> {
            let row = row?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(column, cell)| (column, parse_cell(cell)))
                .collect())
        })
        .collect()
}

/// Numbers stay numbers only if they print back unchanged, so long ids
/// such as tweet ids keep every digit.
fn parse_cell(cell: &str) -> Scalar {
    match cell.parse::<f64>() {
        Ok(n) if Scalar::Number(n).to_string() == cell => Scalar::Number(n),
        _ => Scalar::Text(cell.to_string()),
    }
}
