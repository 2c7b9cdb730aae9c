//! Human Development Index dashboard
//!
//! Data flow:
//! 1. On mount, two independent tasks fetch the HDI table (CSV) and the
//!    country outlines (GeoJSON) from their fixed URLs.
//! 2. The table is reshaped into per-country indicator series and the
//!    outlines are projected once; each lands in its own signal.
//! 3. Once both have resolved, the map, trend chart and scatter plot are
//!    rebuilt from the shared selection on every change.
//!
//! A failed fetch or parse is logged and the page stays on the loading
//! placeholder.

use anyhow::{Context, Result};
use dioxus::prelude::*;
use hdi_chart_ui::components::{
    ChartHeader, ChoroplethMap, CountryNote, LineChart, LoadingSpinner, ScatterPlot, YearSlider,
};
use hdi_chart_ui::js_bridge;
use hdi_chart_ui::state::AppState;
use hdi_data::{CountryData, GeoCollection};

const HDI_CSV_URL: &str = "https://raw.githubusercontent.com/JenniferYao22/HDI-dataset/main/Human%20Development%20Index%20-%20Full.csv";
const COUNTRIES_GEOJSON_URL: &str = "https://gist.githubusercontent.com/hogwild/26558c07f9e4e89306f864412fbdba1d/raw/5458902712c01c79f36dc28db33e345ee71487eb/countries.geo.json";

const INTRO: &str = "Welcome to this interactive dashboard on the Human Development Index (HDI), \
a composite index published by the United Nations Development Programme as a summary measure \
of average achievement in key dimensions of human development: a long and healthy life, being \
knowledgeable and having a decent standard of living. Explore Gross National Income, life \
expectancy and schooling across countries to better understand global development trends. \
Click a country on the map or a point on the scatter plot to select it.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hdi-root"))
        .launch(App);
}

async fn load_table(url: &str) -> Result<CountryData> {
    let csv = js_bridge::fetch_text(url)
        .await
        .context("fetching HDI table")?;
    hdi_data::loader::load_countries(&csv).context("parsing HDI table")
}

async fn load_outlines(url: &str) -> Result<GeoCollection> {
    let text = js_bridge::fetch_text(url)
        .await
        .context("fetching country outlines")?;
    hdi_data::loader::load_geo(&text).context("parsing country outlines")
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Each source resolves once, independently of the other.
    use_effect(move || {
        spawn(async move {
            match load_table(HDI_CSV_URL).await {
                Ok(countries) => state.set_countries(countries),
                Err(e) => log::error!("[HDI] {:#}", e),
            }
        });
        spawn(async move {
            match load_outlines(COUNTRIES_GEOJSON_URL).await {
                Ok(geo) => state.set_geo(geo),
                Err(e) => log::error!("[HDI] {:#}", e),
            }
        });
    });

    let table_ready = state.countries.read().is_some();
    let map_ready = state.geo.read().is_some();

    rsx! {
        div {
            style: "max-width: 1300px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            h1 {
                style: "font-size: 28px; margin: 8px 0;",
                "Human Development Index (HDI)"
            }
            p {
                style: "font-size: 14px; color: #444; line-height: 1.5;",
                "{INTRO}"
            }

            if !state.is_loaded() {
                LoadingSpinner { table_ready, map_ready }
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    div {
                        style: "flex: 7 1 750px;",
                        ChartHeader { title: "Human Development Index (HDI) by Country" }
                        ChoroplethMap {}
                        CountryNote {}
                        YearSlider {}
                    }
                    div {
                        style: "flex: 5 1 500px;",
                        ChartHeader { title: "Trend of HDI Over Time" }
                        LineChart {}
                        ChartHeader {
                            title: "Relationship Between Gross National Income Per Capita and HDI",
                        }
                        ScatterPlot {}
                    }
                }
            }
        }
    }
}
