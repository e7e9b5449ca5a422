/// Error types for the dashboard core
use thiserror::Error;

/// Errors raised while building a CSV export.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExportError {
    /// The header comes from the first record, so there must be one
    #[error("Cannot export an empty record set")]
    EmptyDataset,
}

/// Type alias for Results using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
