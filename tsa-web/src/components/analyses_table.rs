//! Table of past analyses.
//!
//! Rendered as plain HTML; DataTables enhances it once it is in the DOM.
//! The last column opens the detail modal for its row.

use crate::components::DETAILS_MODAL_ID;
use crate::page::BrowserPage;
use crate::state::AppState;
use dioxus::prelude::*;
use tsa_core::analysis::ANALYSIS_DATE_FORMAT;
use tsa_core::load_analysis_details;

#[derive(Props, Clone, PartialEq)]
pub struct AnalysesTableProps {
    /// DOM id of the `<table>`, handed to the table initializer
    pub id: String,
}

#[component]
pub fn AnalysesTable(props: AnalysesTableProps) -> Element {
    let state = use_context::<AppState>();
    let analyses = state.analyses.read().clone();
    let modal_target = format!("#{}", DETAILS_MODAL_ID);

    rsx! {
        table {
            id: "{props.id}",
            class: "table table-striped table-hover w-100",
            thead {
                tr {
                    th { "Date" }
                    th { "Tweet" }
                    th { "Replies" }
                    th { "Positive %" }
                    th { "Negative %" }
                    th { "Neutral %" }
                    th { "Bot %" }
                    th { "" }
                }
            }
            tbody {
                for analysis in analyses.into_iter() {
                    AnalysisRow {
                        key: "{analysis.id}",
                        id: analysis.id,
                        date: analysis.date.format(ANALYSIS_DATE_FORMAT).to_string(),
                        text: analysis.original_text.clone(),
                        replies: analysis.total_replies,
                        percentages: [analysis.with_pct, analysis.against_pct, analysis.neutral_pct, analysis.bot_pct],
                        modal_target: modal_target.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn AnalysisRow(
    id: i64,
    date: String,
    text: String,
    replies: u32,
    percentages: [f64; 4],
    modal_target: String,
) -> Element {
    let mut state = use_context::<AppState>();

    let on_details = move |_| {
        state.selected.set(Some(id));
        if let Some(page) = BrowserPage::current() {
            load_analysis_details(&page, &id.to_string());
        }
    };

    rsx! {
        tr {
            td { "{date}" }
            td { class: "text-truncate", style: "max-width: 320px;", "{text}" }
            td { "{replies}" }
            for pct in percentages {
                td { "{pct:.1}" }
            }
            td {
                button {
                    class: "btn btn-link btn-sm",
                    r#type: "button",
                    "data-bs-toggle": "modal",
                    "data-bs-target": "{modal_target}",
                    onclick: on_details,
                    "Details"
                }
            }
        }
    }
}
