//! Chronological ordering and monthly grouping

use crate::domain::entry::Entry;
use std::collections::BTreeMap;

/// Stable ascending sort by entry instant; undated entries sort first
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.date);
}

/// Group entries into `YYYY-MM` buckets, each sorted chronologically.
/// Entries without a date cannot be bucketed and are dropped with a warning.
pub fn bucket_by_month(entries: Vec<Entry>) -> BTreeMap<String, Vec<Entry>> {
    let mut buckets: BTreeMap<String, Vec<Entry>> = BTreeMap::new();

    for entry in entries {
        match entry.month_key() {
            Some(key) => buckets.entry(key).or_default().push(entry),
            None => log::warn!("entry without a date cannot be bucketed, skipped"),
        }
    }

    for bucket in buckets.values_mut() {
        sort_entries(bucket);
    }

    buckets
}
