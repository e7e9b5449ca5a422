//! Summary card with totals and average sentiment across all analyses.

use crate::state::AppState;
use dioxus::prelude::*;
use tsa_core::AnalysisStats;

#[component]
pub fn StatsSummary() -> Element {
    let state = use_context::<AppState>();
    let stats = AnalysisStats::from_analyses(&(state.analyses)());

    rsx! {
        div {
            class: "row g-3 mb-4 text-center",
            StatTile { label: "Analyses".to_string(), value: stats.total_analyses.to_string() }
            StatTile { label: "Avg. Positive".to_string(), value: format!("{}%", stats.average_sentiment.with) }
            StatTile { label: "Avg. Negative".to_string(), value: format!("{}%", stats.average_sentiment.against) }
            StatTile { label: "Avg. Neutral".to_string(), value: format!("{}%", stats.average_sentiment.neutral) }
            StatTile { label: "Avg. Bots".to_string(), value: format!("{}%", stats.average_bot_percentage) }
        }
    }
}

#[component]
fn StatTile(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "col",
            div {
                class: "card h-100",
                div {
                    class: "card-body",
                    div { class: "h4 mb-0", "{value}" }
                    small { class: "text-muted", "{label}" }
                }
            }
        }
    }
}
