//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Views never mutate the selection directly; they go through
//! [`AppState::toggle_country`] and [`AppState::change_year`].

use dioxus::prelude::*;
use hdi_charts::{
    project_outlines, world_projection, ColorScale, CountryOutline, Pointer, SelectionState,
};
use hdi_data::{CountryData, GeoCollection};

/// Shared state of the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Reshaped HDI table (None until loaded)
    pub countries: Signal<Option<CountryData>>,
    /// Country features (None until loaded)
    pub geo: Signal<Option<GeoCollection>>,
    /// Outlines projected once when the features arrive
    pub outlines: Signal<Vec<CountryOutline>>,
    pub selection: Signal<SelectionState>,
    /// Color scale shared by the map, legend and trend lines
    pub scale: Signal<ColorScale>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            countries: Signal::new(None),
            geo: Signal::new(None),
            outlines: Signal::new(Vec::new()),
            selection: Signal::new(SelectionState::new()),
            scale: Signal::new(ColorScale::hdi()),
        }
    }

    /// Both data sources have resolved.
    pub fn is_loaded(&self) -> bool {
        self.countries.read().is_some() && self.geo.read().is_some()
    }

    pub fn set_countries(&mut self, countries: CountryData) {
        log::info!("[HDI] table ready: {} countries", countries.len());
        self.countries.set(Some(countries));
    }

    pub fn set_geo(&mut self, geo: GeoCollection) {
        let outlines = project_outlines(&geo, &world_projection());
        log::info!("[HDI] map ready: {} outlines", outlines.len());
        self.outlines.set(outlines);
        self.geo.set(Some(geo));
    }

    /// Select `iso3`, or clear the selection if it is already selected.
    /// Ignored until both sources are loaded.
    pub fn toggle_country(&mut self, iso3: &str, pointer: Pointer) {
        let countries_guard = self.countries.read();
        let geo_guard = self.geo.read();
        let (Some(countries), Some(geo)) = (countries_guard.as_ref(), geo_guard.as_ref()) else {
            return;
        };
        self.selection.write().toggle_select(iso3, countries, geo, pointer);
    }

    pub fn change_year(&mut self, year: i32) {
        let countries_guard = self.countries.read();
        let geo_guard = self.geo.read();
        let (Some(countries), Some(geo)) = (countries_guard.as_ref(), geo_guard.as_ref()) else {
            return;
        };
        self.selection.write().change_year(year, countries, geo);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
