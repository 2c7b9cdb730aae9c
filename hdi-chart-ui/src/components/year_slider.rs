//! Year slider driving the selected year.

use crate::state::AppState;
use dioxus::prelude::*;
use hdi_data::years::{FIRST_YEAR, LAST_YEAR};

#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let year = state.selection.read().year();
    let (min, max) = (FIRST_YEAR, LAST_YEAR);

    let on_input = move |evt: Event<FormData>| match evt.value().parse::<i32>() {
        Ok(year) => state.change_year(year),
        Err(e) => log::warn!("[HDI] ignoring slider value {:?}: {}", evt.value(), e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "yearRangeSlider",
                style: "font-weight: bold;",
                "Year: {year}"
            }
            input {
                id: "yearRangeSlider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{year}",
                oninput: on_input,
            }
        }
    }
}
