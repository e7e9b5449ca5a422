//! Card header with title and optional caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Shown under the title in muted text (e.g., "Compound score per reply")
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            class: "card-header",
            h5 { class: "mb-0", "{props.title}" }
            if !props.caption.is_empty() {
                small { class: "text-muted", "{props.caption}" }
            }
        }
    }
}
