//! GNI per capita against HDI for the selected year.

use crate::color::FALLBACK_POINT;
use crate::frame::{ChartFrame, Label, Margin};
use crate::scale::{LinearScale, Tick};
use crate::selection::SelectionState;
use hdi_data::{CountryData, Indicator};
use serde::Serialize;

pub const SCATTER_FRAME: ChartFrame = ChartFrame {
    width: 500.0,
    height: 250.0,
    margin: Margin {
        top: 20.0,
        right: 20.0,
        bottom: 40.0,
        left: 60.0,
    },
};

pub const HIGHLIGHT: &str = "red";
pub const RADIUS: f64 = 3.0;
pub const SELECTED_RADIUS: f64 = 4.0;

/// Estimated size of a hover label, used to keep it inside the chart.
const LABEL_WIDTH: f64 = 100.0;
const LABEL_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub iso3: String,
    pub name: String,
    pub gni: f64,
    pub hdi: f64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: &'static str,
    pub stroke: Option<&'static str>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub frame: ChartFrame,
    pub year: i32,
    /// Upper bound of the GNI axis: the largest GNI plotted this year, or 1
    /// when nothing is plotted.
    pub gni_max: f64,
    pub points: Vec<ScatterPoint>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub selected_label: Option<Label>,
}

/// Plot every country with both GNI and HDI in the selected year. A country
/// missing either value that year is left out, whatever other years hold.
pub fn build_scatter(countries: &CountryData, selection: &SelectionState) -> ScatterView {
    let year = selection.year();
    let plotted: Vec<(&str, &str, f64, f64)> = countries
        .iter()
        .filter_map(|(iso3, record)| {
            let gni = record.value(Indicator::Gni, year)?;
            let hdi = record.value(Indicator::Hdi, year)?;
            Some((iso3, record.country_name.as_str(), gni, hdi))
        })
        .collect();

    let gni_max = match plotted.iter().map(|p| p.2).fold(0.0, f64::max) {
        max if max > 0.0 => max,
        _ => 1.0,
    };
    let x = LinearScale::new((0.0, gni_max), SCATTER_FRAME.x_range());
    let y = LinearScale::new((0.0, 1.0), SCATTER_FRAME.y_range());

    let mut selected_label = None;
    let mut points: Vec<ScatterPoint> = plotted
        .into_iter()
        .map(|(iso3, name, gni, hdi)| {
            let selected = selection.is_selected(iso3);
            let (cx, cy) = (x.apply(gni), y.apply(hdi));
            if selected {
                selected_label = Some(Label {
                    x: cx + 5.0,
                    y: cy + 4.0,
                    text: iso3.to_string(),
                });
            }
            ScatterPoint {
                iso3: iso3.to_string(),
                name: name.to_string(),
                gni,
                hdi,
                cx,
                cy,
                r: if selected { SELECTED_RADIUS } else { RADIUS },
                fill: if selected { HIGHLIGHT } else { FALLBACK_POINT },
                stroke: selected.then_some(HIGHLIGHT),
                selected,
            }
        })
        .collect();
    points.sort_by_key(|p| p.selected);

    ScatterView {
        frame: SCATTER_FRAME,
        year,
        gni_max,
        points,
        x_ticks: x.axis_ticks(10),
        y_ticks: y.axis_ticks(10),
        selected_label,
    }
}

/// Where to put a hover label for a point so it is not clipped by the right
/// or top edge of the chart.
pub fn hover_label_position(point: &ScatterPoint, frame: &ChartFrame) -> (f64, f64) {
    let x = point.cx;
    let y = point.cy - 10.0;
    let label_x = if x + LABEL_WIDTH + 5.0 > frame.width {
        x - LABEL_WIDTH - 5.0
    } else {
        x - 15.0
    };
    let label_y = if y - LABEL_HEIGHT < 0.0 { y + 5.0 } else { y - 5.0 };
    (label_x, label_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Pointer;
    use hdi_data::loader::load_countries;
    use hdi_data::GeoCollection;

    const CSV: &str = "\
ISO3,Country,Human Development Index (2020),Human Development Index (2021),Gross National Income Per Capita (2020),Gross National Income Per Capita (2021)
NOR,Norway,0.959,0.961,63000,64660
SWE,Sweden,0.945,0.947,,54489
PRK,North Korea,,,,
YEM,Yemen,0.460,,1100,1314
";

    fn view_for(year: i32, selected: Option<&str>) -> ScatterView {
        let data = load_countries(CSV).unwrap();
        let geo = GeoCollection::default();
        let mut selection = SelectionState::new();
        selection.change_year(year, &data, &geo);
        if let Some(iso3) = selected {
            selection.toggle_select(iso3, &data, &geo, Pointer::default());
        }
        build_scatter(&data, &selection)
    }

    fn plotted(view: &ScatterView) -> Vec<&str> {
        let mut isos: Vec<&str> = view.points.iter().map(|p| p.iso3.as_str()).collect();
        isos.sort();
        isos
    }

    #[test]
    fn excludes_countries_missing_either_axis_in_that_year() {
        let view = view_for(2021, None);
        // YEM has GNI in 2021 but no HDI; PRK has nothing
        assert_eq!(plotted(&view), vec!["NOR", "SWE"]);

        let view = view_for(2020, None);
        // SWE has no GNI in 2020 even though it has one in 2021
        assert_eq!(plotted(&view), vec!["NOR", "YEM"]);
    }

    #[test]
    fn gni_axis_tracks_the_year_maximum() {
        assert_eq!(view_for(2021, None).gni_max, 64660.0);
        assert_eq!(view_for(2020, None).gni_max, 63000.0);

        let view = view_for(2021, None);
        let nor = view.points.iter().find(|p| p.iso3 == "NOR").unwrap();
        assert_eq!(nor.cx, SCATTER_FRAME.x_range().1);
    }

    #[test]
    fn selected_point_is_red_and_labelled() {
        let view = view_for(2021, Some("SWE"));
        let last = view.points.last().unwrap();
        assert_eq!(last.iso3, "SWE");
        assert_eq!(last.fill, HIGHLIGHT);
        assert_eq!(last.stroke, Some(HIGHLIGHT));
        assert_eq!(last.r, SELECTED_RADIUS);

        let nor = view.points.iter().find(|p| p.iso3 == "NOR").unwrap();
        assert_eq!(nor.fill, FALLBACK_POINT);
        assert_eq!(nor.stroke, None);

        assert_eq!(view.selected_label.unwrap().text, "SWE");
    }

    #[test]
    fn selection_outside_plot_has_no_label() {
        let view = view_for(2021, Some("PRK"));
        assert!(view.selected_label.is_none());
        assert!(view.points.iter().all(|p| !p.selected));
    }

    #[test]
    fn empty_year_does_not_produce_nan_positions() {
        let view = build_scatter(&CountryData::new(), &SelectionState::new());
        assert!(view.points.is_empty());
        assert_eq!(view.gni_max, 1.0);
        assert!(view.x_ticks.iter().all(|t| t.position.is_finite()));
    }

    #[test]
    fn hover_label_flips_at_right_edge() {
        let view = view_for(2021, None);
        let nor = view.points.iter().find(|p| p.iso3 == "NOR").unwrap();
        let (x, y) = hover_label_position(nor, &SCATTER_FRAME);
        assert_eq!(x, nor.cx - LABEL_WIDTH - 5.0);
        // near the top, so the label drops below the point instead
        assert!(y > nor.cy - 10.0);

        let left = ScatterPoint { cx: 100.0, cy: 12.0, ..nor.clone() };
        assert_eq!(hover_label_position(&left, &SCATTER_FRAME), (85.0, 7.0));
    }
}
