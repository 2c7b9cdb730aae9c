//! The single source of truth for which country and year are selected.
//!
//! Map clicks and scatter clicks both go through [`SelectionState::toggle_select`];
//! the slider goes through [`SelectionState::change_year`]. Derived
//! [`CountryInfo`] is recomputed eagerly on every transition so the views can
//! read it without touching the dataset.

use hdi_data::years::{clamp_year, LAST_YEAR};
use hdi_data::{CountryData, GeoCollection, Indicator};
use serde::Serialize;

/// Shown in place of a value that is absent for the selected year.
pub const NOT_AVAILABLE: &str = "N/A";

/// Client coordinates of the click that made a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// The four indicator values of one country in one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndicatorValues {
    pub hdi: Option<f64>,
    pub gni: Option<f64>,
    pub leb: Option<f64>,
    pub eys: Option<f64>,
}

impl IndicatorValues {
    pub fn lookup(countries: &CountryData, iso3: &str, year: i32) -> Self {
        let value = |indicator| countries.value(iso3, indicator, year);
        Self {
            hdi: value(Indicator::Hdi),
            gni: value(Indicator::Gni),
            leb: value(Indicator::Leb),
            eys: value(Indicator::Eys),
        }
    }

    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::Hdi => self.hdi,
            Indicator::Gni => self.gni,
            Indicator::Leb => self.leb,
            Indicator::Eys => self.eys,
        }
    }

    /// Display string: indicator-specific rounding, or "N/A" when absent.
    pub fn formatted(&self, indicator: Indicator) -> String {
        match self.get(indicator) {
            Some(v) => format!("{:.*}", indicator.display_precision(), v),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Like [`formatted`](Self::formatted), with the unit appended to
    /// present values ("64660$", "83.2 years").
    pub fn with_unit(&self, indicator: Indicator) -> String {
        let unit = match indicator {
            Indicator::Hdi => "",
            Indicator::Gni => "$",
            Indicator::Leb | Indicator::Eys => " years",
        };
        match self.get(indicator) {
            Some(_) => format!("{}{}", self.formatted(indicator), unit),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Name and indicator values of the selected country at the selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryInfo {
    pub iso3: String,
    pub name: String,
    pub year: i32,
    pub values: IndicatorValues,
}

impl CountryInfo {
    /// Build the info for `iso3` at `year`. The display name comes from the
    /// map features, then the table, then the code itself.
    pub fn lookup(iso3: &str, year: i32, countries: &CountryData, geo: &GeoCollection) -> Self {
        let name = geo
            .display_name(iso3)
            .or_else(|| countries.get(iso3).map(|r| r.country_name.as_str()))
            .unwrap_or(iso3)
            .to_string();
        Self {
            iso3: iso3.to_string(),
            name,
            year,
            values: IndicatorValues::lookup(countries, iso3, year),
        }
    }

    pub fn formatted(&self, indicator: Indicator) -> String {
        self.values.formatted(indicator)
    }

    /// `(label, value with unit)` rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        Indicator::ALL
            .iter()
            .map(|&indicator| (indicator.label_fragment(), self.values.with_unit(indicator)))
            .collect()
    }
}

/// Selected country, selected year and the derived info.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    selected: Option<String>,
    year: i32,
    info: Option<CountryInfo>,
    pointer: Pointer,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: None,
            year: LAST_YEAR,
            info: None,
            pointer: Pointer::default(),
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, iso3: &str) -> bool {
        self.selected.as_deref() == Some(iso3)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn info(&self) -> Option<&CountryInfo> {
        self.info.as_ref()
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Select `iso3`, or clear the selection if it is already selected.
    /// Returns whether a country is selected afterwards.
    pub fn toggle_select(
        &mut self,
        iso3: &str,
        countries: &CountryData,
        geo: &GeoCollection,
        pointer: Pointer,
    ) -> bool {
        if self.is_selected(iso3) {
            self.clear();
            return false;
        }
        self.selected = Some(iso3.to_string());
        self.info = Some(CountryInfo::lookup(iso3, self.year, countries, geo));
        self.pointer = pointer;
        log::debug!("[HDI] selection: {} at {}", iso3, self.year);
        true
    }

    /// Move to `year` (clamped to the dataset span) and refresh the info of
    /// the selected country, if any. The selection itself is untouched.
    pub fn change_year(&mut self, year: i32, countries: &CountryData, geo: &GeoCollection) {
        self.year = clamp_year(year);
        if let Some(iso3) = self.selected.as_deref() {
            self.info = Some(CountryInfo::lookup(iso3, self.year, countries, geo));
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.info = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdi_data::loader::{load_countries, load_geo};

    const CSV: &str = "\
ISO3,Country,Human Development Index (2020),Human Development Index (2021),Gross National Income Per Capita (2020),Gross National Income Per Capita (2021),Life Expectancy at Birth (2021),Expected Years of Schooling (2021)
NOR,Norway,0.959,0.961,63000,64660,83.2345,18.19
SWE,Sweden,0.945,0.947,,54489,83.0,19.4
";

    const GEOJSON: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "id": "NOR", "properties": {"name": "Norway (map)"}, "geometry": null},
        {"type": "Feature", "id": "FIN", "properties": {"name": "Finland"}, "geometry": null}
    ]}"#;

    fn fixtures() -> (CountryData, GeoCollection) {
        (load_countries(CSV).unwrap(), load_geo(GEOJSON).unwrap())
    }

    #[test]
    fn defaults_to_latest_year_without_selection() {
        let state = SelectionState::new();
        assert_eq!(state.year(), 2021);
        assert_eq!(state.selected(), None);
        assert!(state.info().is_none());
    }

    #[test]
    fn selecting_norway_yields_formatted_info() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        let pointer = Pointer { x: 120.0, y: 45.0 };

        assert!(state.toggle_select("NOR", &countries, &geo, pointer));
        let info = state.info().unwrap();
        assert_eq!(info.name, "Norway (map)");
        assert_eq!(info.formatted(Indicator::Hdi), "0.961");
        assert_eq!(info.formatted(Indicator::Gni), "64660");
        assert_eq!(info.formatted(Indicator::Leb), "83.2");
        assert_eq!(info.formatted(Indicator::Eys), "18.2");
        assert_eq!(state.pointer(), pointer);
    }

    #[test]
    fn selecting_twice_clears() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        state.toggle_select("NOR", &countries, &geo, Pointer::default());
        assert!(!state.toggle_select("NOR", &countries, &geo, Pointer::default()));
        assert_eq!(state.selected(), None);
        assert!(state.info().is_none());
    }

    #[test]
    fn selecting_another_country_switches() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        state.toggle_select("NOR", &countries, &geo, Pointer::default());
        assert!(state.toggle_select("SWE", &countries, &geo, Pointer::default()));
        assert_eq!(state.selected(), Some("SWE"));
        // Not in the map features: falls back to the table name
        assert_eq!(state.info().unwrap().name, "Sweden");
    }

    #[test]
    fn change_year_refreshes_info_and_keeps_selection() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        state.toggle_select("SWE", &countries, &geo, Pointer::default());

        state.change_year(2020, &countries, &geo);
        assert_eq!(state.selected(), Some("SWE"));
        let info = state.info().unwrap();
        assert_eq!(info.year, 2020);
        assert_eq!(info.formatted(Indicator::Hdi), "0.945");
        assert_eq!(info.formatted(Indicator::Gni), NOT_AVAILABLE);
        assert_eq!(info.formatted(Indicator::Leb), NOT_AVAILABLE);
    }

    #[test]
    fn change_year_without_selection_only_moves_year() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        state.change_year(1800, &countries, &geo);
        assert_eq!(state.year(), 1990);
        assert!(state.info().is_none());
    }

    #[test]
    fn country_missing_from_table_shows_not_available() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        state.toggle_select("FIN", &countries, &geo, Pointer::default());
        let info = state.info().unwrap();
        assert_eq!(info.name, "Finland");
        for indicator in Indicator::ALL {
            assert_eq!(info.formatted(indicator), NOT_AVAILABLE);
        }
    }

    #[test]
    fn info_rows_carry_units() {
        let (countries, geo) = fixtures();
        let mut state = SelectionState::new();
        state.toggle_select("NOR", &countries, &geo, Pointer::default());
        let rows = state.info().unwrap().rows();
        assert_eq!(rows[0], ("Human Development Index", "0.961".to_string()));
        assert_eq!(rows[1], ("Gross National Income Per Capita", "64660$".to_string()));
        assert_eq!(rows[2], ("Life Expectancy at Birth", "83.2 years".to_string()));

        state.change_year(2020, &countries, &geo);
        let rows = state.info().unwrap().rows();
        assert_eq!(rows[3].1, NOT_AVAILABLE);
    }
}
