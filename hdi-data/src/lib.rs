//! Core data layer for the Human Development Index dashboard.
//!
//! This crate turns the two static sources the dashboard consumes into typed
//! data:
//! - the wide HDI table (one column per indicator-year) is parsed into
//!   [`record::RawRecord`] rows and reshaped into [`record::CountryData`],
//!   one [`record::CountryRecord`] per ISO3 code with four year-indexed series;
//! - the countries GeoJSON is parsed into a [`geo::GeoCollection`].
//!
//! # Usage
//!
//! ```rust
//! use hdi_data::indicator::Indicator;
//! use hdi_data::loader::load_countries;
//!
//! let csv = "ISO3,Country,Human Development Index (2021),Gross National Income Per Capita (2021)\n\
//!            NOR,Norway,0.961,64660\n";
//! let data = load_countries(csv).unwrap();
//! assert_eq!(data.value("NOR", Indicator::Hdi, 2021), Some(0.961));
//! assert_eq!(data.value("NOR", Indicator::Gni, 2021), Some(64660.0));
//! ```

pub mod error;
pub mod geo;
pub mod indicator;
pub mod loader;
pub mod record;
pub mod reshape;
pub mod years;

pub use error::{HdiError, Result};
pub use geo::{GeoCollection, GeoFeature};
pub use indicator::Indicator;
pub use record::{CountryData, CountryRecord, IndicatorSeries, RawRecord};
