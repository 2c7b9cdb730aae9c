use crate::error::{HdiError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches the first parenthesized 4-digit year in a column label, e.g. "(1995)".
static YEAR_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{4})\)").unwrap());

/// One of the four socioeconomic indicators tracked per country and year.
/// - `Hdi`: Human Development Index, in [0, 1]
/// - `Gni`: Gross National Income per capita
/// - `Leb`: Life Expectancy at Birth, in years
/// - `Eys`: Expected Years of Schooling, in years
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    Hdi,
    Gni,
    Leb,
    Eys,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Hdi,
        Indicator::Gni,
        Indicator::Leb,
        Indicator::Eys,
    ];

    /// The name fragment that identifies this indicator inside a column label.
    pub fn label_fragment(self) -> &'static str {
        match self {
            Indicator::Hdi => "Human Development Index",
            Indicator::Gni => "Gross National Income Per Capita",
            Indicator::Leb => "Life Expectancy at Birth",
            Indicator::Eys => "Expected Years of Schooling",
        }
    }

    /// Number of decimals shown when a value of this indicator is displayed.
    pub fn display_precision(self) -> usize {
        match self {
            Indicator::Hdi => 3,
            Indicator::Gni => 0,
            Indicator::Leb | Indicator::Eys => 1,
        }
    }

    /// Classify a column label by substring match. Labels matching none of the
    /// four fragments (including `ISO3`, `Country`, `HDI Rank (2021)`) yield `None`.
    pub fn classify(label: &str) -> Option<Indicator> {
        Indicator::ALL
            .into_iter()
            .find(|indicator| label.contains(indicator.label_fragment()))
    }

    /// The exact label the source uses for this indicator's headline series.
    pub fn canonical_label(self, year: i32) -> String {
        format!("{} ({})", self.label_fragment(), year)
    }
}

/// Extract the year from the first `(YYYY)` group of a column label.
pub fn parse_year(label: &str) -> Result<i32> {
    YEAR_SUFFIX
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(|| HdiError::MalformedYear(label.to_string()))
}

/// A column label resolved to the indicator and year it holds.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ColumnKey {
    pub indicator: Indicator,
    pub year: i32,
    /// True when the label is exactly `"<fragment> (<year>)"`, as opposed to a
    /// disaggregated variant such as `"Human Development Index (female) (1990)"`.
    pub canonical: bool,
}

impl ColumnKey {
    /// Resolve a column label. `Ok(None)` for labels that are not indicator
    /// columns; an error when an indicator column has no usable year.
    pub fn resolve(label: &str) -> Result<Option<ColumnKey>> {
        let Some(indicator) = Indicator::classify(label) else {
            return Ok(None);
        };
        let year = parse_year(label)?;
        Ok(Some(ColumnKey {
            indicator,
            year,
            canonical: label.trim() == indicator.canonical_label(year),
        }))
    }
}
