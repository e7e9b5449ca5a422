//! Canvas component Chart.js draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// DOM id of the canvas; the chart initializers look it up by this id
    pub id: String,
    /// Optional maximum height in pixels
    #[props(default = 320)]
    pub max_height: u32,
}

/// A responsive wrapper around a `<canvas>` element.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!("position: relative; width: 100%; max-height: {}px;", props.max_height);

    rsx! {
        div {
            style: "{style}",
            canvas { id: "{props.id}" }
        }
    }
}
