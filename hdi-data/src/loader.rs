//! CSV and GeoJSON loading from in-memory text.
//!
//! Fetching is the caller's business (the browser bridge in the UI crate);
//! these functions only turn the response bodies into typed data.
//!
//! # CSV Format
//!
//! Header row required. `ISO3` and `Country` are mandatory; every other
//! column is kept, in header order, as a label → value cell on the `RawRecord`:
//!
//! ```text
//! ISO3,Country,Human Development Index (2020),Human Development Index (2021)
//! NOR,Norway,0.959,0.961
//! ```

use crate::error::{HdiError, Result};
use crate::geo::GeoCollection;
use crate::record::{CountryData, RawRecord};
use crate::reshape::reshape;

pub const ISO3_COLUMN: &str = "ISO3";
pub const COUNTRY_COLUMN: &str = "Country";

/// Parse the wide CSV table into raw rows. Rows with an empty ISO3 are skipped.
pub fn parse_records(csv_data: &str) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    let position = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(HdiError::MissingColumn(name))
    };
    let iso3_idx = position(ISO3_COLUMN)?;
    let country_idx = position(COUNTRY_COLUMN)?;

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let iso3 = r.get(iso3_idx).unwrap_or("").trim();
        if iso3.is_empty() {
            skipped += 1;
            continue;
        }
        let country = r.get(country_idx).unwrap_or("").trim();

        let values = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != iso3_idx && *idx != country_idx)
            .map(|(idx, label)| {
                let cell = r.get(idx).unwrap_or("");
                (label.trim().to_string(), RawRecord::parse_cell(cell))
            })
            .collect();

        records.push(RawRecord {
            iso3: iso3.to_string(),
            country: country.to_string(),
            values,
        });
    }
    log::info!(
        "[HDI] loader: Parsed {} rows ({} columns), skipped {} without ISO3",
        records.len(),
        headers.len(),
        skipped
    );
    Ok(records)
}

/// Parse and reshape the CSV body in one step.
pub fn load_countries(csv_data: &str) -> Result<CountryData> {
    let rows = parse_records(csv_data)?;
    reshape(&rows)
}

/// Parse the GeoJSON body into country features.
pub fn load_geo(geojson_data: &str) -> Result<GeoCollection> {
    let geo = GeoCollection::from_geojson_str(geojson_data)?;
    log::info!("[HDI] loader: Loaded {} country features", geo.len());
    Ok(geo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::Indicator;

    const HDI_CSV: &str = "\
ISO3,Country,Continent,HDI Rank (2021),Human Development Index (2020),Human Development Index (2021),Gross National Income Per Capita (2021),Life Expectancy at Birth (2021),Expected Years of Schooling (2021)
NOR,Norway,Europe,2,0.959,0.961,64660,83.2,18.2
SOM,Somalia,Africa,,,,,55.3,
,Unknown,,,,,,,
";

    #[test]
    fn parse_records_reads_rows() {
        let rows = parse_records(HDI_CSV).unwrap();
        assert_eq!(rows.len(), 2, "row without ISO3 is skipped");

        let nor = &rows[0];
        assert_eq!(nor.iso3, "NOR");
        assert_eq!(nor.country, "Norway");
        let labels: Vec<&str> = nor.values.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels[0], "Continent");
        assert_eq!(labels[1], "HDI Rank (2021)");
        assert_eq!(nor.values[0].1, None);
        assert_eq!(
            nor.values[3],
            ("Human Development Index (2021)".to_string(), Some(0.961))
        );
        assert!(!labels.contains(&"ISO3"));
        assert!(!labels.contains(&"Country"));
    }

    #[test]
    fn header_order_decides_between_variants() {
        let csv = "\
ISO3,Country,\"Life Expectancy at Birth, male (2021)\",\"Life Expectancy at Birth, female (2021)\",Human Development Index (2021),Human Development Index (2021)
NOR,Norway,81.6,84.9,0.961,0.100
";
        let rows = parse_records(csv).unwrap();
        assert_eq!(rows[0].values.len(), 4, "repeated headers are all kept");

        let data = load_countries(csv).unwrap();
        assert_eq!(data.value("NOR", Indicator::Leb, 2021), Some(81.6));
        assert_eq!(data.value("NOR", Indicator::Hdi, 2021), Some(0.961));
    }

    #[test]
    fn parse_records_requires_iso3() {
        let csv = "Country,Human Development Index (2021)\nNorway,0.961\n";
        let err = parse_records(csv).unwrap_err();
        assert!(matches!(err, HdiError::MissingColumn("ISO3")));
    }

    #[test]
    fn load_countries_reshapes() {
        let data = load_countries(HDI_CSV).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.value("NOR", Indicator::Hdi, 2021), Some(0.961));
        assert_eq!(data.value("NOR", Indicator::Gni, 2021), Some(64660.0));
        assert_eq!(data.value("SOM", Indicator::Hdi, 2021), None);
        assert_eq!(data.value("SOM", Indicator::Leb, 2021), Some(55.3));
        assert!(data.get("SOM").unwrap().hdi.contains_key(&2021));
    }
}
