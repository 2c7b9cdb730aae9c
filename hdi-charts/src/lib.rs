//! View models for the HDI dashboard.
//!
//! Everything here is plain data computed from [`hdi_data::CountryData`], the
//! country outlines and a [`selection::SelectionState`]. The UI crate only
//! turns these views into SVG elements and forwards user events back into the
//! selection state.

pub mod color;
pub mod frame;
pub mod legend;
pub mod line_chart;
pub mod map;
pub mod projection;
pub mod scale;
pub mod scatter;
pub mod selection;

pub use color::{to_hex, ColorScale};
pub use legend::{build_legend, LegendView};
pub use line_chart::{build_line_chart, LineChartView};
pub use map::{build_map_view, project_outlines, world_projection, CountryOutline, MapView};
pub use scatter::{build_scatter, ScatterView};
pub use selection::{CountryInfo, Pointer, SelectionState};
