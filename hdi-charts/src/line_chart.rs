//! HDI trend lines, one per country, 1990 to 2021.
//!
//! A line is only defined where the country has a value: a missing year
//! breaks the polyline into separate segments rather than interpolating
//! across the gap.

use crate::color::{ColorScale, FALLBACK_POINT};
use crate::frame::{ChartFrame, Label, Margin};
use crate::scale::{LinearScale, Tick};
use hdi_data::years::{FIRST_YEAR, LAST_YEAR};
use hdi_data::{CountryData, IndicatorSeries};
use serde::Serialize;
use std::fmt::Write;

pub const LINE_FRAME: ChartFrame = ChartFrame {
    width: 500.0,
    height: 250.0,
    margin: Margin {
        top: 20.0,
        right: 30.0,
        bottom: 30.0,
        left: 60.0,
    },
};

pub const X_TICKS: usize = 5;
pub const Y_TICKS: usize = 10;

const SELECTED_WIDTH: f64 = 2.0;
const DEFAULT_WIDTH: f64 = 0.5;
const SELECTED_OPACITY: f64 = 1.0;
const DEFAULT_OPACITY: f64 = 0.2;

/// Runs of consecutive defined `(year, value)` points, oldest first.
pub fn defined_segments(series: &IndicatorSeries) -> Vec<Vec<(i32, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(i32, f64)> = Vec::new();
    for (&year, value) in series {
        match value {
            Some(v) => current.push((year, *v)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Styling of a single trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub stroke_width: f64,
    pub opacity: f64,
}

impl LineStyle {
    pub fn for_selection(selected: bool) -> Self {
        if selected {
            Self {
                stroke_width: SELECTED_WIDTH,
                opacity: SELECTED_OPACITY,
            }
        } else {
            Self {
                stroke_width: DEFAULT_WIDTH,
                opacity: DEFAULT_OPACITY,
            }
        }
    }

    /// Emphasis shown while the pointer is over a line.
    pub fn hovered() -> Self {
        Self::for_selection(true)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub iso3: String,
    pub name: String,
    /// SVG path data; one `M` subpath per defined segment.
    pub path: String,
    pub segment_count: usize,
    /// Colored by the country's value in the latest year.
    pub stroke: String,
    pub style: LineStyle,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartView {
    pub frame: ChartFrame,
    pub series: Vec<LineSeries>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// ISO3 label next to the selected line's last defined point.
    pub end_label: Option<Label>,
}

pub fn x_scale() -> LinearScale {
    LinearScale::new((FIRST_YEAR as f64, LAST_YEAR as f64), LINE_FRAME.x_range())
}

pub fn y_scale() -> LinearScale {
    LinearScale::new((0.0, 1.0), LINE_FRAME.y_range())
}

fn segments_path(segments: &[Vec<(i32, f64)>], x: &LinearScale, y: &LinearScale) -> String {
    let mut d = String::new();
    for segment in segments {
        for (i, (year, value)) in segment.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{:.2},{:.2}", x.apply(*year as f64), y.apply(*value));
        }
    }
    d
}

/// Build the trend chart. The selected line is drawn last.
pub fn build_line_chart(
    countries: &CountryData,
    selected: Option<&str>,
    scale: &ColorScale,
) -> LineChartView {
    let (x, y) = (x_scale(), y_scale());
    let mut end_label = None;

    let mut series: Vec<LineSeries> = countries
        .iter()
        .map(|(iso3, record)| {
            let segments = defined_segments(&record.hdi);
            let is_selected = selected == Some(iso3);
            if is_selected {
                end_label = segments.last().and_then(|s| s.last()).map(|&(year, value)| Label {
                    x: x.apply(year as f64) + 5.0,
                    y: y.apply(value),
                    text: iso3.to_string(),
                });
            }
            let latest = record.hdi.get(&LAST_YEAR).copied().flatten();
            LineSeries {
                iso3: iso3.to_string(),
                name: record.country_name.clone(),
                path: segments_path(&segments, &x, &y),
                segment_count: segments.len(),
                stroke: scale.fill(latest, FALLBACK_POINT),
                style: LineStyle::for_selection(is_selected),
                selected: is_selected,
            }
        })
        .filter(|s| s.segment_count > 0)
        .collect();
    series.sort_by_key(|s| s.selected);

    LineChartView {
        frame: LINE_FRAME,
        series,
        x_ticks: x.axis_ticks_with(X_TICKS, |year| format!("{year:.0}")),
        y_ticks: y.axis_ticks(Y_TICKS),
        end_label,
    }
}
