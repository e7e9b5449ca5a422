//! Form for requesting a new thread analysis.
//!
//! Carries the `needs-validation` class; `tsa_core::forms` wires it up at
//! startup, so this component has no submit handler of its own.

use dioxus::prelude::*;
use tsa_core::forms::NEEDS_VALIDATION_CLASS;

#[component]
pub fn AnalysisForm() -> Element {
    let form_class = format!("row g-2 align-items-start {}", NEEDS_VALIDATION_CLASS);

    rsx! {
        form {
            class: "{form_class}",
            action: "/analyze",
            method: "post",
            "novalidate": "true",
            div {
                class: "col-md-8",
                label { r#for: "tweet-id", class: "form-label", "Tweet ID" }
                input {
                    id: "tweet-id",
                    name: "tweet_id",
                    class: "form-control",
                    r#type: "text",
                    "inputmode": "numeric",
                    pattern: "[0-9]+",
                    required: true,
                }
                div { class: "invalid-feedback", "Enter the numeric id of the thread's first post." }
            }
            div {
                class: "col-md-4 d-flex align-items-end",
                button { class: "btn btn-primary mt-4", r#type: "submit", "Analyze Thread" }
            }
        }
    }
}
