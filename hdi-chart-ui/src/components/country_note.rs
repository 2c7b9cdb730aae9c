//! Floating note with the selected country's indicators, shown where the
//! selecting click happened.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CountryNote() -> Element {
    let state = use_context::<AppState>();
    let selection = state.selection.read();
    let Some(info) = selection.info() else {
        return rsx! {};
    };
    let pointer = selection.pointer();
    let style = format!(
        "position: fixed; left: {}px; top: {}px; max-width: 300px; font-size: 10px; \
         padding: 8px 12px; background: #d1ecf1; color: #0c5460; \
         border: 1px solid #bee5eb; border-radius: 4px; z-index: 10;",
        pointer.x, pointer.y
    );
    let title = format!("{} ({})", info.name, info.year);
    let rows = info.rows();

    rsx! {
        div {
            class: "country-note",
            style: "{style}",
            strong { "{title}" }
            for (label, value) in rows {
                div {
                    key: "{label}",
                    style: "display: flex; justify-content: space-between;",
                    span { "{label}:" }
                    span { style: "margin-left: 10px;", "{value}" }
                }
            }
        }
    }
}
