//! Session-scoped filter criteria and their evaluation.
//!
//! Each set-membership dimension is a `HashSet` built once per criteria
//! change, so evaluating a whole record set stays linear regardless of
//! how many values a filter holds. An empty set means "no constraint".

use std::collections::HashSet;
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};

use crate::analytics::{classify_content_type, classify_orientation, classify_quality};
use crate::entities::{ContentType, Orientation, QualityClass, Record};

/// Closed datetime range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// The previous UTC day, the dashboard's default range on load.
pub fn yesterday(now: DateTime<Utc>) -> DateRange {
    let day = (now - Duration::days(1)).date_naive();
    DateRange {
        start: day.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        end: day.and_hms_opt(23, 59, 59).unwrap().and_utc(),
    }
}

/// The full set of active user-chosen constraints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub date_range: Option<DateRange>,
    pub domains: HashSet<String>,
    pub qualities: HashSet<QualityClass>,
    pub extensions: HashSet<String>,
    pub sources: HashSet<String>,
    pub orientations: HashSet<Orientation>,
    pub types: HashSet<ContentType>,
    /// Tri-state: `None` means unconstrained.
    pub has_video: Option<bool>,
}

impl FilterCriteria {
    /// All clauses conjunctive; within a clause, membership in the allowed
    /// set is enough. Unset range and empty sets pass everything.
    pub fn passes(&self, record: &Record) -> bool {
        if !self.passes_date_only(record) {
            return false;
        }
        if !passes_set(&self.domains, &record.domain) {
            return false;
        }
        if !self.qualities.is_empty() && !self.qualities.contains(&classify_quality(record)) {
            return false;
        }
        if !passes_set(&self.extensions, &record.image_extension) {
            return false;
        }
        if !self.sources.is_empty() && !self.sources.contains(&record.source) {
            return false;
        }
        if !self.orientations.is_empty()
            && !self.orientations.contains(&classify_orientation(record))
        {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&classify_content_type(&record.url)) {
            return false;
        }
        if let Some(wanted) = self.has_video
            && record.has_video != wanted
        {
            return false;
        }
        true
    }

    /// The temporal clause alone, used for the "total in period before
    /// other filters" count.
    pub fn passes_date_only(&self, record: &Record) -> bool {
        match self.date_range {
            Some(range) => range.contains(record.published_at),
            None => true,
        }
    }
}

fn passes_set(allowed: &HashSet<String>, value: &str) -> bool {
    allowed.is_empty() || allowed.contains(value)
}

/// Add `value` if absent, remove it if present. Works for any filter
/// dimension.
pub fn toggle<T: Eq + Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Distinct values available to the filter panel, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub domains: Vec<String>,
    pub sources: Vec<String>,
    pub extensions: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Record]) -> Self {
        let mut options = FilterOptions::default();
        let mut seen_domains = HashSet::new();
        let mut seen_sources = HashSet::new();
        let mut seen_extensions = HashSet::new();

        for record in records {
            if seen_domains.insert(record.domain.as_str()) {
                options.domains.push(record.domain.clone());
            }
            if seen_sources.insert(record.source.as_str()) {
                options.sources.push(record.source.clone());
            }
            if seen_extensions.insert(record.image_extension.as_str()) {
                options.extensions.push(record.image_extension.clone());
            }
        }

        options
    }
}
