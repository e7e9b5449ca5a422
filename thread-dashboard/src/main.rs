//! Thread Sentiment Dashboard
//!
//! Lists past thread analyses in a DataTables-enhanced table, charts the
//! sentiment split and the per-reply score timeline of the selected
//! analysis with Chart.js, summarizes averages across all analyses, and
//! exports the list as CSV.
//!
//! Data flow:
//! 1. `build.rs` copies `analyses.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the JSON into the WASM binary.
//! 3. On mount the analyses are parsed into `AppState`; the first one is selected.
//! 4. Once the table is in the DOM, form validation and DataTables are
//!    initialized exactly once.
//! 5. Whenever the selection changes, both charts are redrawn.

use dioxus::prelude::*;
use tsa_core::{
    initialize_data_table, initialize_form_validation, initialize_sentiment_chart,
    initialize_timeline_chart, Analysis,
};
use tsa_web::components::{
    AnalysesTable, AnalysisForm, ChartCanvas, ChartHeader, DetailsModal, ErrorDisplay,
    ExportButton, LoadingSpinner, StatsSummary,
};
use tsa_web::js_bridge::{ChartJs, DataTables};
use tsa_web::page::BrowserPage;
use tsa_web::state::AppState;

/// Past analyses, newest first.
const ANALYSES_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/analyses.json"));

const TABLE_ID: &str = "past-analyses";
const SENTIMENT_CANVAS_ID: &str = "sentimentChart";
const TIMELINE_CANVAS_ID: &str = "timelineChart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("thread-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut widgets_ready = use_signal(|| false);

    // Load the embedded analyses on mount
    use_effect(move || {
        match serde_json::from_str::<Vec<Analysis>>(ANALYSES_JSON) {
            Ok(analyses) => {
                log::info!("Loaded {} analyses", analyses.len());
                state.selected.set(analyses.first().map(|a| a.id));
                state.analyses.set(analyses);
            }
            Err(e) => {
                log::error!("Failed to parse analyses: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load analyses: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Wire page-level widgets once the table has been rendered
    use_effect(move || {
        if (state.loading)() || *widgets_ready.peek() {
            return;
        }
        let Some(page) = BrowserPage::current() else {
            return;
        };
        let forms = initialize_form_validation(&page);
        let table = initialize_data_table(&page, &DataTables, TABLE_ID);
        log::debug!("Widgets ready: {} validated form(s), table enhanced: {}", forms, table);
        widgets_ready.set(true);
    });

    // Redraw both charts whenever the selection changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(analysis) = state.selected_analysis() else {
            return;
        };
        let Some(page) = BrowserPage::current() else {
            return;
        };

        initialize_sentiment_chart(
            &ChartJs,
            page.canvas(SENTIMENT_CANVAS_ID).as_ref(),
            &analysis.sentiment_summary(),
        );
        initialize_timeline_chart(
            &ChartJs,
            page.canvas(TIMELINE_CANVAS_ID).as_ref(),
            &analysis.sentiment_progression,
        );
    });

    let selected_title = state
        .selected_analysis()
        .map(|a| format!("Tweet {}", a.tweet_id))
        .unwrap_or_default();

    rsx! {
        div {
            class: "container py-4",

            h1 { class: "h3 mb-4", "Thread Sentiment Dashboard" }

            div {
                class: "card mb-4",
                div { class: "card-body", AnalysisForm {} }
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                StatsSummary {}

                div {
                    class: "row g-4 mb-4",
                    div {
                        class: "col-lg-5",
                        div {
                            class: "card h-100",
                            ChartHeader { title: "Sentiment Split".to_string(), caption: selected_title.clone() }
                            div { class: "card-body", ChartCanvas { id: SENTIMENT_CANVAS_ID.to_string() } }
                        }
                    }
                    div {
                        class: "col-lg-7",
                        div {
                            class: "card h-100",
                            ChartHeader {
                                title: "Sentiment Timeline".to_string(),
                                caption: "Compound score per reply, in reply order".to_string(),
                            }
                            div { class: "card-body", ChartCanvas { id: TIMELINE_CANVAS_ID.to_string() } }
                        }
                    }
                }

                div {
                    class: "card",
                    div {
                        class: "card-header d-flex justify-content-between align-items-center",
                        h5 { class: "mb-0", "Past Analyses" }
                        ExportButton {}
                    }
                    div {
                        class: "card-body",
                        AnalysesTable { id: TABLE_ID.to_string() }
                    }
                }
            }

            DetailsModal {}
        }
    }
}
