use crate::domain::model::{RawRow, SiteRecord};
use crate::utils::error::{Result, SiteError};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

/// Ordered, immutable snapshot of all site records. Built once from raw
/// rows; every query is a read-only pass over it. A changed input means a
/// new store, never an in-place mutation, so a snapshot can be shared
/// freely across concurrent readers.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<SiteRecord>,
}

impl RecordStore {
    /// Builds the store from raw rows: coerces the register-date column and
    /// drops later rows that repeat an already-seen resource name (the
    /// export repeats some locations, which would inflate the per-county
    /// statistics).
    ///
    /// An unparseable date anywhere fails the whole load; a store built
    /// from partially-bad data is worse than no store.
    pub fn load(rows: Vec<RawRow>) -> Result<RecordStore> {
        let mut records = Vec::with_capacity(rows.len());
        let mut seen_names: HashSet<String> = HashSet::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            if seen_names.contains(&row.resource_name) {
                tracing::debug!(
                    "Dropping duplicate of '{}' at row {}",
                    row.resource_name,
                    index
                );
                continue;
            }

            let register_date =
                parse_register_date(&row.register_date).map_err(|_| SiteError::LoadError {
                    message: format!(
                        "row {}: unparseable National Register Date '{}'",
                        index, row.register_date
                    ),
                })?;

            seen_names.insert(row.resource_name.clone());
            records.push(SiteRecord {
                name: row.resource_name,
                register_number: row.register_number,
                register_date,
                county: row.county,
                latitude: row.latitude,
                longitude: row.longitude,
            });
        }

        Ok(RecordStore { records })
    }

    pub fn records(&self) -> &[SiteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact-match lookup by National Register Number. A miss is a normal
    /// outcome; the caller owns the user-facing message.
    pub fn find_by_register_number(&self, number: &str) -> Option<&SiteRecord> {
        self.records
            .iter()
            .find(|record| record.register_number == number)
    }

    /// The subset belonging to one county, in store order. Feeds the year
    /// aggregator and the county map view.
    pub fn county_records(&self, county: &str) -> Vec<&SiteRecord> {
        self.records
            .iter()
            .filter(|record| record.county == county)
            .collect()
    }

    /// Every distinct county name, alphabetically sorted. Used to enumerate
    /// county choices and to bound top-N requests.
    pub fn unique_counties(&self) -> Vec<String> {
        let mut counties: Vec<String> = self
            .records
            .iter()
            .map(|record| record.county.clone())
            .collect();
        counties.sort();
        counties.dedup();
        counties
    }
}

/// Mean latitude/longitude of a record set, for centering a map viewport.
/// Empty input has no meaningful center.
pub fn mean_position(records: &[&SiteRecord]) -> Option<(f64, f64)> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;
    let lat = records.iter().map(|r| r.latitude).sum::<f64>() / n;
    let lon = records.iter().map(|r| r.longitude).sum::<f64>() / n;
    Some((lat, lon))
}

// The state export is not consistent about date formatting, so try the
// shapes that actually occur: ISO dates, ISO datetimes, and US-style
// month/day/year.
fn parse_register_date(text: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
}
