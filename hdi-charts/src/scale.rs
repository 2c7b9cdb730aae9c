//! Linear axis scales on top of plotters' numeric coordinates.
//!
//! Positions come from `Ranged::map` and are whole pixels. Tick values are
//! plotters' key points, so a requested count is an upper bound.

use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use serde::Serialize;

/// Maps a continuous domain onto a pixel range.
pub struct LinearScale {
    coord: RangedCoordf64,
    range: (f64, f64),
}

/// A labelled axis tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            coord: (domain.0..domain.1).into(),
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        let r = self.coord.range();
        (r.start, r.end)
    }

    /// Project a domain value to the range. Values outside the domain extrapolate.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain();
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        self.coord.map(&value, (r0 as i32, r1 as i32)) as f64
    }

    /// At most `count` round tick values over the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain();
        if !d0.is_finite() || !d1.is_finite() || count == 0 {
            return Vec::new();
        }
        self.coord.key_points(count)
    }

    /// Ticks with positions, labelled with as many decimals as their spacing needs.
    pub fn axis_ticks(&self, count: usize) -> Vec<Tick> {
        let values = self.ticks(count);
        let decimals = match values.as_slice() {
            [a, b, ..] => (-(b - a).log10().floor()).max(0.0) as usize,
            _ => 0,
        };
        self.label_ticks(values, |value| format!("{value:.decimals$}"))
    }

    /// Ticks labelled by a custom formatter, e.g. plain years.
    pub fn axis_ticks_with(&self, count: usize, format: impl Fn(f64) -> String) -> Vec<Tick> {
        self.label_ticks(self.ticks(count), format)
    }

    fn label_ticks(&self, values: Vec<f64>, format: impl Fn(f64) -> String) -> Vec<Tick> {
        values
            .into_iter()
            .map(|value| Tick {
                value,
                position: self.apply(value),
                label: format(value),
            })
            .collect()
    }
}
