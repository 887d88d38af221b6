use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use chrono::{NaiveDate, Timelike};
use serde::Serialize;

use crate::entities::{QualityClass, Record};

use super::classify::classify_quality;

const GAUSSIAN_STEPS: f64 = 50.0;

/// One point of the width density curve. `x` is rounded for display,
/// density is kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaussianPoint {
    pub x: i64,
    pub density: f64,
}

/// Normal density curve over a numeric sample, walked from min to max in
/// 50 equal steps. Empty input yields an empty curve. When every sample
/// is identical the population standard deviation is zero and the density
/// formula degenerates; that case collapses to a single unit-density point
/// at the sample value instead of producing non-finite output.
pub fn gaussian_curve(samples: &[f64]) -> Vec<GaussianPoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return vec![GaussianPoint {
            x: samples[0].round() as i64,
            density: 1.0,
        }];
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / GAUSSIAN_STEPS;
    let coefficient = 1.0 / (std_dev * (2.0 * PI).sqrt());

    let mut points = Vec::with_capacity(GAUSSIAN_STEPS as usize + 1);
    let mut x = min;
    while x <= max {
        let z = (x - mean) / std_dev;
        points.push(GaussianPoint {
            x: x.round() as i64,
            density: coefficient * (-0.5 * z * z).exp(),
        });
        x += step;
    }

    points
}

/// Widths eligible for the density curve: placeholder images and unknown
/// widths are excluded.
pub fn width_samples(records: &[Record]) -> Vec<f64> {
    records
        .iter()
        .filter(|r| !r.is_placeholder() && r.image_width > 0)
        .map(|r| f64::from(r.image_width))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRow {
    pub hour: u8,
    /// Average daily count per domain, aligned with `HourlyAverages::domains`.
    pub per_domain: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyAverages {
    /// Domains in first-seen order.
    pub domains: Vec<String>,
    /// 24 rows, hours 0..=23.
    pub rows: Vec<HourlyRow>,
}

/// Average publications per hour of day and domain.
///
/// Counts are grouped by calendar day (UTC) and divided by the number of
/// distinct days present in the whole input, so a day with no records for
/// a given hour/domain still weighs the average down. The divisor is
/// shared across domains, matching the dashboard's observed behavior even
/// though it deflates domains active on fewer days.
pub fn hourly_average_by_domain(records: &[Record]) -> HourlyAverages {
    let mut days: HashSet<NaiveDate> = HashSet::new();
    let mut domains: Vec<String> = Vec::new();
    let mut domain_index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<[u32; 24]> = Vec::new();

    for record in records {
        days.insert(record.published_at.date_naive());
        let hour = record.published_at.hour() as usize;

        let idx = match domain_index.get(record.domain.as_str()) {
            Some(&idx) => idx,
            None => {
                domain_index.insert(record.domain.as_str(), domains.len());
                domains.push(record.domain.clone());
                totals.push([0u32; 24]);
                domains.len() - 1
            }
        };
        totals[idx][hour] += 1;
    }

    let divisor = days.len().max(1) as f64;
    let rows = (0u8..24)
        .map(|hour| HourlyRow {
            hour,
            per_domain: totals
                .iter()
                .map(|counts| f64::from(counts[hour as usize]) / divisor)
                .collect(),
        })
        .collect();

    HourlyAverages { domains, rows }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// Records per source label, sorted descending by count. The sort is
/// stable, so ties keep first-seen order.
pub fn top_sources_by_count(records: &[Record], limit: usize) -> Vec<SourceCount> {
    let mut counts: Vec<SourceCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.source.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                index.insert(record.source.as_str(), counts.len());
                counts.push(SourceCount {
                    source: record.source.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

pub const WEIGHT_BUCKET_LABELS: [&str; 4] = ["0-100kb", "101-300kb", "301-500kb", "500kb+"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Image weight histogram over four fixed kilobyte buckets with inclusive
/// upper bounds.
pub fn weight_histogram(records: &[Record]) -> [WeightBucket; 4] {
    let mut counts = [0usize; 4];
    for record in records {
        let w = record.image_weight;
        if w <= 100.0 {
            counts[0] += 1;
        } else if w <= 300.0 {
            counts[1] += 1;
        } else if w <= 500.0 {
            counts[2] += 1;
        } else {
            counts[3] += 1;
        }
    }

    let mut i = 0;
    WEIGHT_BUCKET_LABELS.map(|label| {
        let bucket = WeightBucket {
            label,
            count: counts[i],
        };
        i += 1;
        bucket
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityCount {
    pub class: QualityClass,
    pub count: usize,
}

/// Records per quality class, zero-count classes omitted (the pie chart
/// never renders empty slices).
pub fn quality_distribution(records: &[Record]) -> Vec<QualityCount> {
    let mut counts: HashMap<QualityClass, usize> = HashMap::new();
    for record in records {
        *counts.entry(classify_quality(record)).or_insert(0) += 1;
    }

    QualityClass::ALL
        .iter()
        .filter_map(|&class| {
            counts.get(&class).map(|&count| QualityCount { class, count })
        })
        .collect()
}
