//! World map colored by HDI for the selected year.

use crate::components::{ChartContainer, ColorLegend};
use crate::state::AppState;
use dioxus::prelude::*;
use hdi_charts::map::{MapShape, LEGEND_OFFSET, MAP_HEIGHT, MAP_WIDTH, STROKE};
use hdi_charts::{build_legend, build_map_view, Pointer};

#[component]
pub fn ChoroplethMap() -> Element {
    let state = use_context::<AppState>();

    let view = {
        let countries = state.countries.read();
        let Some(countries) = countries.as_ref() else {
            return rsx! {};
        };
        build_map_view(
            &state.outlines.read(),
            countries,
            &state.selection.read(),
            &state.scale.read(),
        )
    };
    let legend = build_legend(&state.scale.read());
    let (legend_x, legend_y) = LEGEND_OFFSET;
    let legend_transform = format!("translate({legend_x}, {legend_y})");

    rsx! {
        ChartContainer {
            id: "hdi-map",
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            g {
                class: "countries",
                for shape in view.shapes {
                    CountryShape { key: "{shape.iso3}", shape: shape.clone() }
                }
            }
            g {
                transform: "{legend_transform}",
                ColorLegend { legend }
            }
        }
    }
}

#[component]
fn CountryShape(shape: MapShape) -> Element {
    let mut state = use_context::<AppState>();
    let iso3 = shape.iso3.clone();

    rsx! {
        path {
            d: "{shape.path}",
            fill: "{shape.fill}",
            stroke: STROKE,
            stroke_width: shape.stroke_width,
            style: "cursor: pointer;",
            onclick: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                state.toggle_country(&iso3, Pointer { x: at.x, y: at.y });
            },
        }
    }
}
