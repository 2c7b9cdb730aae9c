//! Placeholder shown until both data sources have resolved.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(table_ready: bool, map_ready: bool) -> Element {
    let pending: Vec<&str> = [(table_ready, "HDI table"), (map_ready, "country outlines")]
        .into_iter()
        .filter(|(ready, _)| !ready)
        .map(|(_, name)| name)
        .collect();
    let waiting = pending.join(", ");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px; color: #666;",
            "Loading..."
            if !pending.is_empty() {
                span {
                    style: "font-size: 12px; margin-top: 4px;",
                    "Waiting for {waiting}"
                }
            }
        }
    }
}
