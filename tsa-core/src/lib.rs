//! Platform-free core of the thread sentiment dashboard.
//!
//! This crate provides:
//! - `record` / `csv_export`: ordered export rows and the CSV download payload
//! - `chart`, `sentiment`, `timeline`: Chart.js configurations for the doughnut and line charts
//! - `table`: DataTables options and the table initializer
//! - `forms`: submit-time validation for `.needs-validation` forms
//! - `details`: the analysis detail placeholder
//! - `analysis`: the stored analysis model, its export row and aggregate stats
//! - `dom`: the traits through which the browser (or a test fake) is injected
//!
//! Nothing here touches `web-sys`; the `tsa-web` crate implements the
//! `dom` and renderer traits for the browser.

pub mod analysis;
pub mod chart;
pub mod csv_export;
pub mod details;
pub mod dom;
pub mod error;
pub mod forms;
pub mod record;
pub mod sentiment;
pub mod table;
pub mod timeline;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::{analyses_to_records, Analysis, AnalysisStats};
pub use chart::{ChartConfig, ChartRenderer};
pub use csv_export::{csv_data_uri, csv_payload, export_to_csv};
pub use details::load_analysis_details;
pub use error::{ExportError, Result};
pub use forms::initialize_form_validation;
pub use record::{Record, Scalar};
pub use sentiment::{initialize_sentiment_chart, SentimentCategory, SentimentSummary};
pub use table::{initialize_data_table, TableOptions, TableRenderer};
pub use timeline::{initialize_timeline_chart, TimelinePoint};
