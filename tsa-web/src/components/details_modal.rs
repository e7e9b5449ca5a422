//! Bootstrap modal whose body the detail loader writes into.

use dioxus::prelude::*;
use tsa_core::details::DETAILS_CONTAINER_ID;

pub const DETAILS_MODAL_ID: &str = "detailsModal";

#[component]
pub fn DetailsModal() -> Element {
    rsx! {
        div {
            id: DETAILS_MODAL_ID,
            class: "modal fade",
            tabindex: "-1",
            "aria-hidden": "true",
            div {
                class: "modal-dialog modal-lg",
                div {
                    class: "modal-content",
                    div {
                        class: "modal-header",
                        h5 { class: "modal-title", "Analysis Details" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            "data-bs-dismiss": "modal",
                            "aria-label": "Close",
                        }
                    }
                    // Content is replaced directly through the DOM.
                    div { id: DETAILS_CONTAINER_ID, class: "modal-body" }
                }
            }
        }
    }
}
