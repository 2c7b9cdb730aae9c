//! Wide-to-nested reshaping of the source table.
//!
//! The source has one column per indicator-year ("Human Development Index
//! (1995)", "Life Expectancy at Birth (2010)", ...). The reshaper folds those
//! columns into one `CountryRecord` per ISO3 code holding four year-indexed
//! series.

use crate::error::Result;
use crate::indicator::{ColumnKey, Indicator};
use crate::record::{CountryData, CountryRecord, RawRecord};
use std::collections::{HashMap, HashSet};

/// Reshape raw rows into a mapping keyed by ISO3 code.
///
/// Columns whose label matches none of the four indicator fragments are
/// ignored. An indicator column without a `(YYYY)` year aborts the whole
/// reshape. When several labels resolve to the same (indicator, year) slot the
/// canonical `"<fragment> (<year>)"` label wins, otherwise the leftmost column
/// wins. A later row with an already-seen ISO3 replaces the earlier one.
pub fn reshape(rows: &[RawRecord]) -> Result<CountryData> {
    let mut resolved: HashMap<&str, Option<ColumnKey>> = HashMap::new();
    let mut data = CountryData::new();

    for row in rows {
        let mut record = CountryRecord::new(row.country.clone());
        let mut canonical_slots: HashSet<(Indicator, i32)> = HashSet::new();

        for (label, value) in &row.values {
            let key = match resolved.get(label.as_str()) {
                Some(key) => *key,
                None => {
                    let key = ColumnKey::resolve(label)?;
                    resolved.insert(label.as_str(), key);
                    key
                }
            };
            let Some(key) = key else {
                continue;
            };

            let slot = (key.indicator, key.year);
            let series = record.series_mut(key.indicator);
            let take = if key.canonical {
                !canonical_slots.contains(&slot)
            } else {
                !series.contains_key(&key.year)
            };
            if take {
                series.insert(key.year, *value);
                if key.canonical {
                    canonical_slots.insert(slot);
                }
            }
        }

        if data.insert(row.iso3.clone(), record).is_some() {
            log::warn!("[HDI] reshape: duplicate ISO3 {} replaced earlier row", row.iso3);
        }
    }

    log::info!(
        "[HDI] reshape: {} rows -> {} countries, {} distinct columns",
        rows.len(),
        data.len(),
        resolved.len()
    );
    Ok(data)
}
