//! Loading indicator shown while the embedded analyses are parsed.

use dioxus::prelude::*;

/// Centered Bootstrap spinner with a screen-reader label.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "d-flex justify-content-center p-5",
            div {
                class: "spinner-border text-primary",
                role: "status",
                span { class: "visually-hidden", "Loading analyses..." }
            }
        }
    }
}
