//! Piecewise-linear HDI color scale shared by the map, the legend and the
//! line chart.

use crate::scale::LinearScale;
use plotters::style::RGBColor;

/// Fill used on the map for countries without a value in the selected year.
pub const FALLBACK_FILL: &str = "#ccc";

/// Neutral color for scatter dots and lines without a value.
pub const FALLBACK_POINT: &str = "grey";

/// `#rrggbb` for an SVG attribute.
pub fn to_hex(color: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

/// Per-channel linear mix from `a` towards `b`. `t` is not clamped, so values
/// outside [0, 1] extrapolate; channels saturate at 0 and 255.
fn mix(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| {
        let v = a as f64 + (b as f64 - a as f64) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    RGBColor(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// A breakpoint of the scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub value: f64,
    pub color: RGBColor,
    pub name: &'static str,
}

/// Piecewise-linear mapping from a value to a color across sorted stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// The six-stop HDI scale: red at 0.3 through dark blue at 1.0.
    pub fn hdi() -> Self {
        let stop = |value, color, name| ColorStop { value, color, name };
        Self {
            stops: vec![
                stop(0.3, RGBColor(189, 29, 26), "red"),
                stop(0.5, RGBColor(251, 140, 0), "orange"),
                stop(0.6, RGBColor(253, 216, 53), "yellow"),
                stop(0.7, RGBColor(18, 117, 14), "green"),
                stop(0.85, RGBColor(29, 26, 201), "blue"),
                stop(1.0, RGBColor(52, 87, 213), "dark-blue"),
            ],
        }
    }

    /// `(first stop, last stop)` values.
    pub fn domain(&self) -> (f64, f64) {
        (self.stops[0].value, self.stops[self.stops.len() - 1].value)
    }

    /// Color for `value`. Inside the domain the two surrounding stops are
    /// interpolated; outside it the first or last segment is extended.
    pub fn color(&self, value: f64) -> RGBColor {
        let last_segment = self.stops.len() - 2;
        let i = self
            .stops
            .iter()
            .rposition(|s| s.value <= value)
            .unwrap_or(0)
            .min(last_segment);
        let (a, b) = (&self.stops[i], &self.stops[i + 1]);
        mix(a.color, b.color, (value - a.value) / (b.value - a.value))
    }

    /// Hex color for an optional value, `fallback` when absent.
    pub fn fill(&self, value: Option<f64>, fallback: &str) -> String {
        match value {
            Some(v) if v.is_finite() => to_hex(self.color(v)),
            _ => fallback.to_string(),
        }
    }

    /// Round sample values across the domain with their colors. Both ends of
    /// the domain are always included.
    pub fn ticks(&self, count: usize) -> Vec<(f64, RGBColor)> {
        let (lo, hi) = self.domain();
        let mut values = LinearScale::new((lo, hi), (0.0, 1.0)).ticks(count);
        if values.first().map_or(true, |&v| v > lo) {
            values.insert(0, lo);
        }
        if values.last().map_or(true, |&v| v < hi) {
            values.push(hi);
        }
        values.into_iter().map(|v| (v, self.color(v))).collect()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::hdi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_rrggbb() {
        assert_eq!(to_hex(RGBColor(0x1d, 0x1a, 0xc9)), "#1d1ac9");
        assert_eq!(to_hex(RGBColor(0, 0, 0)), "#000000");
    }

    #[test]
    fn stops_map_to_their_colors() {
        let scale = ColorScale::hdi();
        assert_eq!(to_hex(scale.color(0.3)), "#bd1d1a");
        assert_eq!(to_hex(scale.color(0.5)), "#fb8c00");
        assert_eq!(to_hex(scale.color(0.7)), "#12750e");
        assert_eq!(to_hex(scale.color(0.85)), "#1d1ac9");
        assert_eq!(to_hex(scale.color(1.0)), "#3457d5");
    }

    #[test]
    fn interpolates_between_stops() {
        let scale = ColorScale::hdi();
        // A little past green (0.7) towards blue (0.85)
        assert_eq!(scale.color(0.72), RGBColor(0x13, 0x69, 0x27));
    }

    #[test]
    fn top_band_mixes_blue_and_dark_blue() {
        let scale = ColorScale::hdi();
        assert_eq!(to_hex(scale.color(0.961)), "#2e47d2");
        for hdi in [0.86, 0.90, 0.961] {
            let c = scale.color(hdi);
            assert!((0x1d..=0x34).contains(&c.0), "{hdi}: {c:?}");
            assert!((0x1a..=0x57).contains(&c.1), "{hdi}: {c:?}");
        }
    }

    #[test]
    fn extrapolates_below_first_stop() {
        let scale = ColorScale::hdi();
        let low = scale.color(0.2);
        // Extends the red -> orange segment backwards instead of flattening to red
        assert_ne!(low, scale.color(0.3));
        assert_eq!(low, RGBColor(0x9e, 0x00, 0x27));
    }

    #[test]
    fn fill_uses_fallback_for_absent_values() {
        let scale = ColorScale::hdi();
        assert_eq!(scale.fill(None, FALLBACK_FILL), "#ccc");
        assert_eq!(scale.fill(Some(f64::NAN), FALLBACK_FILL), "#ccc");
        assert_eq!(scale.fill(Some(0.85), FALLBACK_FILL), "#1d1ac9");
    }

    #[test]
    fn ticks_cover_domain() {
        let ticks = ColorScale::hdi().ticks(10);
        assert_eq!(ticks.first().map(|t| t.0), Some(0.3));
        assert_eq!(ticks.last().map(|t| t.0), Some(1.0));
        assert!(ticks.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
