//! Reusable Dioxus RSX components for the dashboard.

mod analyses_table;
mod analysis_form;
mod chart_canvas;
mod chart_header;
mod details_modal;
mod error_display;
mod export_button;
mod loading_spinner;
mod stats_summary;

pub use analyses_table::AnalysesTable;
pub use analysis_form::AnalysisForm;
pub use chart_canvas::ChartCanvas;
pub use chart_header::ChartHeader;
pub use details_modal::{DetailsModal, DETAILS_MODAL_ID};
pub use error_display::ErrorDisplay;
pub use export_button::ExportButton;
pub use loading_spinner::LoadingSpinner;
pub use stats_summary::StatsSummary;
