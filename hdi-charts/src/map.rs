//! Choropleth map view model.
//!
//! Outlines are projected once per dataset (`project_outlines`); fills are
//! recomputed per year and selection (`build_map_view`).

use crate::color::{ColorScale, FALLBACK_FILL};
use crate::projection::Mercator;
use crate::selection::SelectionState;
use hdi_data::{CountryData, GeoCollection, Indicator};
use serde::Serialize;

pub const MAP_WIDTH: f64 = 750.0;
pub const MAP_HEIGHT: f64 = 547.0;

pub const STROKE: &str = "#000";
pub const STROKE_WIDTH: f64 = 0.5;
pub const SELECTED_STROKE_WIDTH: f64 = 2.0;

/// Top-left corner of the color legend inside the map canvas.
pub const LEGEND_OFFSET: (f64, f64) = (MAP_WIDTH - 320.0, MAP_HEIGHT - 70.0);

/// The world projection used on the dashboard map.
pub fn world_projection() -> Mercator {
    Mercator::new(150.0, (MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0 + 50.0))
}

/// A projected country outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryOutline {
    pub iso3: String,
    pub name: String,
    pub path: String,
}

/// Project every feature with geometry into SVG path data.
pub fn project_outlines(geo: &GeoCollection, projection: &Mercator) -> Vec<CountryOutline> {
    geo.features()
        .iter()
        .filter_map(|f| {
            let geometry = f.geometry.as_ref()?;
            Some(CountryOutline {
                iso3: f.iso3.clone(),
                name: f.name.clone(),
                path: projection.path(geometry),
            })
        })
        .filter(|o| !o.path.is_empty())
        .collect()
}

/// One drawable country shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapShape {
    pub iso3: String,
    pub name: String,
    pub path: String,
    pub hdi: Option<f64>,
    pub fill: String,
    pub stroke_width: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub year: i32,
    pub shapes: Vec<MapShape>,
}

/// Color each outline by its HDI in the selected year. The selected shape is
/// drawn last so its outline sits on top of its neighbours.
pub fn build_map_view(
    outlines: &[CountryOutline],
    countries: &CountryData,
    selection: &SelectionState,
    scale: &ColorScale,
) -> MapView {
    let year = selection.year();
    let mut shapes: Vec<MapShape> = outlines
        .iter()
        .map(|o| {
            let hdi = countries.value(&o.iso3, Indicator::Hdi, year);
            let selected = selection.is_selected(&o.iso3);
            MapShape {
                iso3: o.iso3.clone(),
                name: o.name.clone(),
                path: o.path.clone(),
                hdi,
                fill: scale.fill(hdi, FALLBACK_FILL),
                stroke_width: if selected { SELECTED_STROKE_WIDTH } else { STROKE_WIDTH },
                selected,
            }
        })
        .collect();
    shapes.sort_by_key(|s| s.selected);
    MapView { year, shapes }
}
