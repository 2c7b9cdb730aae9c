//! Gradient legend for the HDI color scale.

use dioxus::prelude::*;
use hdi_charts::legend::{LegendView, HIGH_CAPTION, LOW_CAPTION};

const GRADIENT_ID: &str = "gradient-color-legend";

/// Draws into the enclosing `svg`; position it with a translated `g`.
#[component]
pub fn ColorLegend(legend: LegendView) -> Element {
    let fill = format!("url(#{GRADIENT_ID})");
    let (width, height) = (legend.width, legend.height);
    let stops: Vec<(String, String)> = legend
        .stops
        .iter()
        .map(|s| (s.offset_percent(), s.color.clone()))
        .collect();

    rsx! {
        g {
            class: "color-legend",
            defs {
                linearGradient {
                    id: GRADIENT_ID,
                    for (offset, color) in stops {
                        stop { offset: "{offset}", stop_color: "{color}" }
                    }
                }
            }
            text {
                x: width / 2.0,
                y: 10.0,
                text_anchor: "middle",
                font_size: "12",
                font_weight: "bold",
                "{legend.title}"
            }
            text { x: 0.0, y: 22.0, font_size: "10", font_weight: "bold", "{LOW_CAPTION}" }
            text {
                x: width,
                y: 22.0,
                text_anchor: "end",
                font_size: "10",
                font_weight: "bold",
                "{HIGH_CAPTION}"
            }
            rect { x: 0.0, y: 25.0, width, height, fill: "{fill}" }
            text { x: 0.0, y: height + 45.0, font_size: "10", "{legend.min_label}" }
            text {
                x: width - 5.0,
                y: height + 45.0,
                text_anchor: "end",
                font_size: "10",
                "{legend.max_label}"
            }
        }
    }
}
