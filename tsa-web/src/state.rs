//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tsa_core::Analysis;

/// Shared state of the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Past analyses, newest first as loaded
    pub analyses: Signal<Vec<Analysis>>,
    /// Id of the analysis whose charts are shown
    pub selected: Signal<Option<i64>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            analyses: Signal::new(Vec::new()),
            selected: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// The currently selected analysis, if any.
    pub fn selected_analysis(&self) -> Option<Analysis> {
        let id = (self.selected)()?;
        self.analyses.read().iter().find(|a| a.id == id).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
