//! CSV export of records as a browser download.
//!
//! The payload is plain comma joining: values are never quoted or escaped,
//! so a value containing a comma, quote or newline shifts the columns of
//! its row. The first record's columns form the header.

use crate::dom::Page;
use crate::error::{ExportError, Result};
use crate::record::Record;
use log::debug;

/// Prefix of the data URI handed to the download anchor.
pub const CSV_DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// Build the CSV text: header line plus one line per record, each ending in `\n`.
pub fn csv_payload(records: &[Record]) -> Result<String> {
    let first = records.first().ok_or(ExportError::EmptyDataset)?;

    let mut csv = String::new();
    csv.push_str(&first.columns().collect::<Vec<_>>().join(","));
    csv.push('\n');

    for record in records {
        let row: Vec<String> = record.values().map(|v| v.to_string()).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

/// The full `data:` URI for the records, percent-encoded like `encodeURI`.
pub fn csv_data_uri(records: &[Record]) -> Result<String> {
    let payload = csv_payload(records)?;
    Ok(encode_uri(&format!("{}{}", CSV_DATA_URI_PREFIX, payload)))
}

/// Trigger a download of the records as `filename` on the given page.
///
/// The filename is used as given; no extension is added.
pub fn export_to_csv<P: Page>(page: &P, records: &[Record], filename: &str) -> Result<()> {
    let uri = csv_data_uri(records)?;
    debug!("Exporting {} records to {}", records.len(), filename);
    page.click_download_link(&uri, filename);
    Ok(())
}

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI_UNESCAPED: &[u8] = b"-_.!~*'();/?:@&=+$,#";

/// Percent-encode everything except unreserved and reserved URI characters.
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || URI_UNESCAPED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}
