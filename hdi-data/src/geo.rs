//! Country boundaries from a GeoJSON FeatureCollection.
//!
//! Each feature's `id` is an ISO3 code and `properties.name` its display name.
//! Geometry is kept opaque here; projection happens in the chart crate.

use crate::error::{HdiError, Result};
use geojson::{feature::Id, Feature, GeoJson, Geometry};
use std::str::FromStr;

/// A single country shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub iso3: String,
    pub name: String,
    pub geometry: Option<Geometry>,
}

impl GeoFeature {
    /// Build from a GeoJSON feature. Features without an id are not countries
    /// we can join on and yield `None`.
    fn from_feature(feature: Feature) -> Option<Self> {
        let iso3 = match feature.id.as_ref()? {
            Id::String(s) => s.clone(),
            Id::Number(n) => n.to_string(),
        };
        let name = feature
            .property("name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| iso3.clone());
        Some(GeoFeature {
            iso3,
            name,
            geometry: feature.geometry,
        })
    }
}

/// All country features, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoCollection {
    features: Vec<GeoFeature>,
}

impl GeoCollection {
    pub fn from_geojson_str(s: &str) -> Result<Self> {
        let collection = match GeoJson::from_str(s)? {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(HdiError::NotFeatureCollection),
        };
        let total = collection.features.len();
        let features: Vec<GeoFeature> = collection
            .features
            .into_iter()
            .filter_map(GeoFeature::from_feature)
            .collect();
        if features.len() < total {
            log::warn!(
                "[HDI] geo: skipped {} features without an id",
                total - features.len()
            );
        }
        Ok(Self { features })
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    pub fn find(&self, iso3: &str) -> Option<&GeoFeature> {
        self.features.iter().find(|f| f.iso3 == iso3)
    }

    /// Display name of the country with this ISO3 code.
    pub fn display_name(&self, iso3: &str) -> Option<&str> {
        self.find(iso3).map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "id": "NOR", "properties": {"name": "Norway"},
     "geometry": {"type": "Polygon", "coordinates": [[[5.0, 58.0], [31.0, 70.0], [10.0, 64.0], [5.0, 58.0]]]}},
    {"type": "Feature", "id": "ATA", "properties": {},
     "geometry": {"type": "Polygon", "coordinates": [[[0.0, -80.0], [10.0, -80.0], [5.0, -85.0], [0.0, -80.0]]]}},
    {"type": "Feature", "properties": {"name": "No id"}, "geometry": null}
  ]
}"#;

    #[test]
    fn parses_feature_collection() {
        let geo = GeoCollection::from_geojson_str(COUNTRIES_GEOJSON).unwrap();
        assert_eq!(geo.len(), 2, "feature without id is skipped");
        assert_eq!(geo.display_name("NOR"), Some("Norway"));
        assert!(geo.find("NOR").unwrap().geometry.is_some());
    }

    #[test]
    fn missing_name_falls_back_to_id() {
        let geo = GeoCollection::from_geojson_str(COUNTRIES_GEOJSON).unwrap();
        assert_eq!(geo.display_name("ATA"), Some("ATA"));
        assert_eq!(geo.display_name("XXX"), None);
    }

    #[test]
    fn rejects_non_collections() {
        let point = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        let err = GeoCollection::from_geojson_str(point).unwrap_err();
        assert!(matches!(err, HdiError::NotFeatureCollection));

        assert!(matches!(
            GeoCollection::from_geojson_str("not json"),
            Err(HdiError::GeoJsonParse(_))
        ));
    }
}
