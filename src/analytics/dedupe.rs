use std::collections::HashSet;

use crate::entities::Record;

/// Collapse a record list to one entry per URL, keeping the first record
/// seen per key and preserving first-seen order. Idempotent.
pub fn dedupe_by_url(records: &[Record]) -> Vec<Record> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut distinct = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(record.url.as_str()) {
            distinct.push(record.clone());
        }
    }

    distinct
}
