//! Dioxus RSX components of the HDI dashboard.

mod axis;
mod chart_container;
mod chart_header;
mod choropleth_map;
mod color_legend;
mod country_note;
mod line_chart;
mod loading_spinner;
mod scatter_plot;
mod year_slider;

pub use axis::{BottomAxis, LeftAxis};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use choropleth_map::ChoroplethMap;
pub use color_legend::ColorLegend;
pub use country_note::CountryNote;
pub use line_chart::LineChart;
pub use loading_spinner::LoadingSpinner;
pub use scatter_plot::ScatterPlot;
pub use year_slider::YearSlider;
