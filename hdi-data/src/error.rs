/// Error types for loading and reshaping the HDI sources
use thiserror::Error;

/// Main error type for HDI data operations
#[derive(Error, Debug)]
pub enum HdiError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A column the loader cannot do without is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// An indicator column label carries no `(YYYY)` year suffix
    #[error("Column label has no 4-digit year suffix: {0}")]
    MalformedYear(String),

    /// Failed to parse GeoJSON
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJsonParse(#[from] geojson::Error),

    /// GeoJSON parsed but was not a FeatureCollection
    #[error("Expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,
}

/// Type alias for Results using HdiError
pub type Result<T> = std::result::Result<T, HdiError>;
