//! Error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Bootstrap danger alert with the message.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "alert alert-danger",
            role: "alert",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
