//! Row and country level data structures.
//!
//! `RawRecord` mirrors one row of the wide source table; `CountryRecord` is the
//! reshaped per-indicator, per-year view of the same row. All structs derive
//! `Serialize` so they can be handed to the UI layer or dumped for debugging.

use crate::indicator::Indicator;
use serde::Serialize;
use std::collections::BTreeMap;

/// Year → value for one indicator of one country. `None` marks a column that
/// exists in the source but carries no numeric value.
pub type IndicatorSeries = BTreeMap<i32, Option<f64>>;

/// One row of the source table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RawRecord {
    /// ISO 3166-1 alpha-3 code, the join key with the GeoJSON features.
    pub iso3: String,
    /// Country display name as written in the CSV.
    pub country: String,
    /// Every other column in header order as `(label, value)`; `None` when the
    /// cell is blank or non-numeric. Labels may repeat.
    pub values: Vec<(String, Option<f64>)>,
}

impl RawRecord {
    /// Parse a raw cell into a numeric value. Blank and non-numeric cells are missing.
    pub fn parse_cell(cell: &str) -> Option<f64> {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// The reshaped record for a single country.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CountryRecord {
    pub country_name: String,
    pub hdi: IndicatorSeries,
    pub gni: IndicatorSeries,
    pub leb: IndicatorSeries,
    pub eys: IndicatorSeries,
}

impl CountryRecord {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
            ..Default::default()
        }
    }

    pub fn series(&self, indicator: Indicator) -> &IndicatorSeries {
        match indicator {
            Indicator::Hdi => &self.hdi,
            Indicator::Gni => &self.gni,
            Indicator::Leb => &self.leb,
            Indicator::Eys => &self.eys,
        }
    }

    pub fn series_mut(&mut self, indicator: Indicator) -> &mut IndicatorSeries {
        match indicator {
            Indicator::Hdi => &mut self.hdi,
            Indicator::Gni => &mut self.gni,
            Indicator::Leb => &mut self.leb,
            Indicator::Eys => &mut self.eys,
        }
    }

    /// Value of `indicator` in `year`, `None` when the year is absent or blank.
    pub fn value(&self, indicator: Indicator, year: i32) -> Option<f64> {
        self.series(indicator).get(&year).copied().flatten()
    }
}

/// Reshaped dataset: ISO3 → CountryRecord.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CountryData {
    records: BTreeMap<String, CountryRecord>,
}

impl CountryData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced, if any.
    pub fn insert(
        &mut self,
        iso3: impl Into<String>,
        record: CountryRecord,
    ) -> Option<CountryRecord> {
        self.records.insert(iso3.into(), record)
    }

    pub fn get(&self, iso3: &str) -> Option<&CountryRecord> {
        self.records.get(iso3)
    }

    /// Value of `indicator` for `iso3` in `year`.
    pub fn value(&self, iso3: &str, indicator: Indicator, year: i32) -> Option<f64> {
        self.get(iso3).and_then(|r| r.value(indicator, year))
    }

    /// Iterate `(iso3, record)` pairs in ISO3 order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.records.iter().map(|(iso3, r)| (iso3.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_handles_blank_and_garbage() {
        assert_eq!(RawRecord::parse_cell("0.961"), Some(0.961));
        assert_eq!(RawRecord::parse_cell(" 64660 "), Some(64660.0));
        assert_eq!(RawRecord::parse_cell(""), None);
        assert_eq!(RawRecord::parse_cell("  "), None);
        assert_eq!(RawRecord::parse_cell(".."), None);
        assert_eq!(RawRecord::parse_cell("NaN"), None);
    }

    #[test]
    fn zero_is_a_value_not_a_gap() {
        assert_eq!(RawRecord::parse_cell("0"), Some(0.0));
    }

    #[test]
    fn value_lookup_flattens_blank_years() {
        let mut record = CountryRecord::new("Norway");
        record.hdi.insert(2020, Some(0.959));
        record.hdi.insert(2021, None);

        assert_eq!(record.value(Indicator::Hdi, 2020), Some(0.959));
        assert_eq!(record.value(Indicator::Hdi, 2021), None);
        assert_eq!(record.value(Indicator::Hdi, 1990), None);
        assert_eq!(record.value(Indicator::Gni, 2020), None);
    }

    #[test]
    fn country_data_insert_replaces() {
        let mut data = CountryData::new();
        assert!(data.insert("NOR", CountryRecord::new("Norway")).is_none());
        let previous = data.insert("NOR", CountryRecord::new("Norway (updated)"));
        assert_eq!(previous.map(|r| r.country_name), Some("Norway".to_string()));
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("NOR").unwrap().country_name, "Norway (updated)");
    }
}
