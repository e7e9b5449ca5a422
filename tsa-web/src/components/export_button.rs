//! Button exporting the listed analyses as CSV.

use crate::page::BrowserPage;
use crate::state::AppState;
use dioxus::prelude::*;
use tsa_core::{analyses_to_records, export_to_csv};

#[derive(Props, Clone, PartialEq)]
pub struct ExportButtonProps {
    /// Download name, used verbatim
    #[props(default = "thread_analyses.csv".to_string())]
    pub filename: String,
}

#[component]
pub fn ExportButton(props: ExportButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let disabled = state.analyses.read().is_empty();

    let on_click = move |_| {
        let Some(page) = BrowserPage::current() else {
            return;
        };
        let records = analyses_to_records(&state.analyses.read());
        if let Err(e) = export_to_csv(&page, &records, &props.filename) {
            log::error!("CSV export failed: {}", e);
            state.error_msg.set(Some(format!("Export failed: {}", e)));
        }
    };

    rsx! {
        button {
            class: "btn btn-outline-secondary btn-sm",
            r#type: "button",
            disabled,
            onclick: on_click,
            "Export CSV"
        }
    }
}
