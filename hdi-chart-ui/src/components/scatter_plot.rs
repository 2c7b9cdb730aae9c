//! GNI per capita against HDI for the selected year. Clicking a point
//! toggles the same selection as the map.

use crate::components::{BottomAxis, ChartContainer, LeftAxis};
use crate::state::AppState;
use dioxus::prelude::*;
use hdi_charts::frame::{ChartFrame, Label};
use hdi_charts::scatter::{hover_label_position, ScatterPoint, HIGHLIGHT, SELECTED_RADIUS};
use hdi_charts::{build_scatter, Pointer};

const HIGHLIGHT_STROKE_WIDTH: f64 = 2.0;

#[component]
pub fn ScatterPlot() -> Element {
    let state = use_context::<AppState>();
    let hovered: Signal<Option<(String, Label)>> = use_signal(|| None);

    let view = {
        let countries = state.countries.read();
        let Some(countries) = countries.as_ref() else {
            return rsx! {};
        };
        build_scatter(countries, &state.selection.read())
    };
    let frame = view.frame;
    let hover_label = hovered.read().as_ref().map(|(_, label)| label.clone());

    rsx! {
        ChartContainer {
            id: "hdi-scatter",
            width: frame.width,
            height: frame.height,
            BottomAxis { frame, ticks: view.x_ticks, title: "Gross National Income Per Capita" }
            LeftAxis { frame, ticks: view.y_ticks, title: "Human Development Index Level" }
            g {
                class: "dots",
                for point in view.points {
                    ScatterDot { key: "{point.iso3}", point: point.clone(), frame, hovered }
                }
            }
            if let Some(label) = view.selected_label {
                text {
                    x: label.x,
                    y: label.y,
                    font_size: "14",
                    font_weight: "bold",
                    "{label.text}"
                }
            }
            if let Some(label) = hover_label {
                text {
                    x: label.x,
                    y: label.y,
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
fn ScatterDot(
    point: ScatterPoint,
    frame: ChartFrame,
    hovered: Signal<Option<(String, Label)>>,
) -> Element {
    let mut state = use_context::<AppState>();
    let mut hovered = hovered;
    let is_hovered = hovered
        .read()
        .as_ref()
        .is_some_and(|(iso3, _)| *iso3 == point.iso3);

    let (r, fill, stroke, stroke_width) = if is_hovered {
        (SELECTED_RADIUS, HIGHLIGHT, HIGHLIGHT, HIGHLIGHT_STROKE_WIDTH)
    } else {
        match point.stroke {
            Some(stroke) => (point.r, point.fill, stroke, HIGHLIGHT_STROKE_WIDTH),
            None => (point.r, point.fill, "none", 0.0),
        }
    };
    let (label_x, label_y) = hover_label_position(&point, &frame);
    let (click_iso3, hover_iso3, name) =
        (point.iso3.clone(), point.iso3.clone(), point.name.clone());

    rsx! {
        circle {
            cx: point.cx,
            cy: point.cy,
            r,
            fill,
            stroke,
            stroke_width,
            style: "cursor: pointer;",
            onclick: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                state.toggle_country(&click_iso3, Pointer { x: at.x, y: at.y });
            },
            onmouseover: move |_| {
                let label = Label { x: label_x, y: label_y, text: name.clone() };
                hovered.set(Some((hover_iso3.clone(), label)));
            },
            onmouseout: move |_| hovered.set(None),
        }
    }
}
