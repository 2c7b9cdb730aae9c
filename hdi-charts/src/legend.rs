//! Horizontal gradient legend for the HDI color scale.

use crate::color::{to_hex, ColorScale};
use serde::Serialize;

pub const LEGEND_TITLE: &str = "HDI Value Level";
pub const LEGEND_WIDTH: f64 = 300.0;
pub const LEGEND_HEIGHT: f64 = 20.0;
pub const LOW_CAPTION: &str = "low";
pub const HIGH_CAPTION: &str = "high";

const SAMPLES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the bar in `[0, 1]`.
    pub offset: f64,
    pub color: String,
}

impl GradientStop {
    /// `offset` as an SVG percentage, e.g. "42.86%".
    pub fn offset_percent(&self) -> String {
        format!("{:.2}%", self.offset * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendView {
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub stops: Vec<GradientStop>,
    pub min_label: String,
    pub max_label: String,
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn build_legend(scale: &ColorScale) -> LegendView {
    let samples = scale.ticks(SAMPLES);
    let last = samples.len().saturating_sub(1).max(1) as f64;
    let stops = samples
        .into_iter()
        .enumerate()
        .map(|(i, (_, color))| GradientStop {
            offset: i as f64 / last,
            color: to_hex(color),
        })
        .collect();
    let (lo, hi) = scale.domain();

    LegendView {
        title: LEGEND_TITLE,
        width: LEGEND_WIDTH,
        height: LEGEND_HEIGHT,
        stops,
        min_label: percent(lo),
        max_label: percent(hi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_spans_the_scale() {
        let legend = build_legend(&ColorScale::hdi());
        let first = legend.stops.first().unwrap();
        let last = legend.stops.last().unwrap();
        assert_eq!(first.offset, 0.0);
        assert_eq!(first.color, "#bd1d1a");
        assert_eq!(last.offset, 1.0);
        assert_eq!(last.color, "#3457d5");
        assert_eq!(last.offset_percent(), "100.00%");
        assert!(legend.stops.windows(2).all(|w| w[0].offset < w[1].offset));
    }

    #[test]
    fn bounds_are_percentages() {
        let legend = build_legend(&ColorScale::hdi());
        assert_eq!(legend.title, "HDI Value Level");
        assert_eq!(legend.min_label, "30.00%");
        assert_eq!(legend.max_label, "100.00%");
    }
}
