pub mod classify;
pub mod dedupe;
pub mod stats;
pub mod trash;

pub use classify::{classify_content_type, classify_orientation, classify_quality};
pub use dedupe::dedupe_by_url;
pub use stats::{
    GaussianPoint, HourlyAverages, QualityCount, SourceCount, WeightBucket, gaussian_curve,
    hourly_average_by_domain, quality_distribution, top_sources_by_count, weight_histogram,
    width_samples,
};
pub use trash::{TrashEntry, rank_trash};

use serde::Serialize;

use crate::entities::Record;
use crate::filters::FilterCriteria;

const TOP_SOURCES_LIMIT: usize = 10;

/// Everything the dashboard renders for one (records, criteria) pair.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Size of the raw record set.
    pub total: usize,
    /// Records passing the date clause alone ("total in period").
    pub in_period: usize,
    /// Records passing every active filter.
    pub filtered: usize,
    pub quality_distribution: Vec<QualityCount>,
    pub weight_histogram: [WeightBucket; 4],
    pub top_sources: Vec<SourceCount>,
    pub width_density: Vec<GaussianPoint>,
    pub hourly: HourlyAverages,
    pub trash: Vec<TrashEntry>,
}

/// Run the full pipeline once: filter, dedupe, aggregate, rank.
///
/// Charts consume the deduped subset so duplicated URLs are not counted
/// twice; the trash table ranks the filtered subset directly.
pub fn build_snapshot(records: &[Record], criteria: &FilterCriteria) -> DashboardSnapshot {
    let filtered: Vec<Record> = records
        .iter()
        .filter(|r| criteria.passes(r))
        .cloned()
        .collect();
    let in_period = records
        .iter()
        .filter(|r| criteria.passes_date_only(r))
        .count();

    let distinct = dedupe_by_url(&filtered);

    DashboardSnapshot {
        total: records.len(),
        in_period,
        filtered: filtered.len(),
        quality_distribution: quality_distribution(&distinct),
        weight_histogram: weight_histogram(&distinct),
        top_sources: top_sources_by_count(&distinct, TOP_SOURCES_LIMIT),
        width_density: gaussian_curve(&width_samples(&distinct)),
        hourly: hourly_average_by_domain(&distinct),
        trash: rank_trash(&filtered),
    }
}
