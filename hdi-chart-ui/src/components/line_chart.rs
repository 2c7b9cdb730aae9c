//! HDI trend per country with hover emphasis.

use crate::components::{BottomAxis, ChartContainer, LeftAxis};
use crate::state::AppState;
use dioxus::prelude::*;
use hdi_charts::build_line_chart;
use hdi_charts::frame::Label;
use hdi_charts::line_chart::{LineSeries, LineStyle};

/// Line under the pointer: its ISO3 and the name label drawn next to the pointer.
type Hovered = Option<(String, Label)>;

#[component]
pub fn LineChart() -> Element {
    let state = use_context::<AppState>();
    let hovered: Signal<Hovered> = use_signal(|| None);

    let view = {
        let countries = state.countries.read();
        let Some(countries) = countries.as_ref() else {
            return rsx! {};
        };
        build_line_chart(
            countries,
            state.selection.read().selected(),
            &state.scale.read(),
        )
    };
    let frame = view.frame;
    let hover_label = hovered.read().as_ref().map(|(_, label)| label.clone());

    rsx! {
        ChartContainer {
            id: "hdi-trend",
            width: frame.width,
            height: frame.height,
            BottomAxis { frame, ticks: view.x_ticks, title: "Year" }
            LeftAxis { frame, ticks: view.y_ticks, title: "Human Development Index Level" }
            g {
                class: "lines",
                for series in view.series {
                    TrendLine { key: "{series.iso3}", series: series.clone(), hovered }
                }
            }
            if let Some(label) = view.end_label {
                text {
                    x: label.x,
                    y: label.y,
                    fill: "black",
                    font_size: "11",
                    font_weight: "bold",
                    "{label.text}"
                }
            }
            if let Some(label) = hover_label {
                text {
                    x: label.x,
                    y: label.y,
                    fill: "black",
                    font_size: "14",
                    font_weight: "bold",
                    style: "pointer-events: none;",
                    "{label.text}"
                }
            }
        }
    }
}

#[component]
fn TrendLine(series: LineSeries, hovered: Signal<Hovered>) -> Element {
    let mut hovered = hovered;
    let is_hovered = hovered
        .read()
        .as_ref()
        .is_some_and(|(iso3, _)| *iso3 == series.iso3);
    let style = if is_hovered { LineStyle::hovered() } else { series.style };
    let (iso3, name) = (series.iso3.clone(), series.name.clone());

    rsx! {
        path {
            d: "{series.path}",
            fill: "none",
            stroke: "{series.stroke}",
            stroke_width: style.stroke_width,
            opacity: style.opacity,
            onmouseover: move |evt: MouseEvent| {
                let at = evt.element_coordinates();
                let label = Label { x: at.x + 10.0, y: at.y + 10.0, text: name.clone() };
                hovered.set(Some((iso3.clone(), label)));
            },
            onmouseout: move |_| hovered.set(None),
        }
    }
}
