use crate::core::store::RecordStore;
use crate::domain::model::SiteRecord;
use crate::utils::error::{Result, SiteError};
use std::collections::HashMap;

/// Counts records per county. The mapping order is first-encountered store
/// order; values sum to the store length since every record belongs to
/// exactly one county.
pub fn county_counts(store: &RecordStore) -> Vec<(String, u64)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for record in store.records() {
        match slots.get(record.county.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(record.county.as_str(), counts.len());
                counts.push((record.county.clone(), 1));
            }
        }
    }

    counts
}

/// The `n` highest-count entries, descending by count. The sort is stable,
/// so counties with equal counts keep their first-encountered order.
///
/// `n` must be within `[1, counts.len()]`; anything else is a caller
/// contract violation, including any request against zero counties.
pub fn top_n(counts: &[(String, u64)], n: usize) -> Result<Vec<(String, u64)>> {
    if n < 1 || n > counts.len() {
        return Err(SiteError::TopNOutOfRange {
            requested: n,
            available: counts.len(),
        });
    }

    let mut ordered = counts.to_vec();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered.truncate(n);
    Ok(ordered)
}

/// Counts records per registration year over an already county-scoped
/// subset; no filtering happens here. Mapping order is first-encountered;
/// any parsed calendar year counts as-is.
pub fn year_counts(records: &[&SiteRecord]) -> Vec<(i32, u64)> {
    let mut slots: HashMap<i32, usize> = HashMap::new();
    let mut counts: Vec<(i32, u64)> = Vec::new();

    for record in records {
        let year = chrono::Datelike::year(&record.register_date);
        match slots.get(&year) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(year, counts.len());
                counts.push((year, 1));
            }
        }
    }

    counts
}
