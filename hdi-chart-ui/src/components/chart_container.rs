//! Fixed-size SVG canvas for a chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the `svg` element
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub children: Element,
}

/// An `svg` of the given size; children are drawn in pixel coordinates.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            style: "position: relative; width: 100%; overflow-x: auto;",
            svg {
                id: "{props.id}",
                width: props.width,
                height: props.height,
                font_family: "system-ui, -apple-system, sans-serif",
                {props.children}
            }
        }
    }
}
