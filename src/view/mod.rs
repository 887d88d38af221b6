//! The persisted query surface: a read-only SQLite view over the scraper
//! output. Rows are converted to `Record`s before anything else sees
//! them: weights go from bytes to rounded kilobytes, has_video from 0/1
//! to bool, naive timestamps to UTC instants, NULLs to zero/empty
//! defaults.

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::entities::Record;

pub const VIEW_NAME: &str = "article_image_view";

const SELECT_COLUMNS: &str = "SELECT url, domain, image_url, image_width, image_height, \
     image_extension, image_weight, has_video, source, published_at, fetched_at \
     FROM article_image_view";

/// Fail fast at startup when the expected view (or table) is missing.
pub async fn ensure_view_exists(pool: &SqlitePool) -> Result<()> {
    let found: Option<(String, String)> = sqlx::query_as(
        "SELECT name, type FROM sqlite_master WHERE name = ? AND (type = 'table' OR type = 'view')",
    )
    .bind(VIEW_NAME)
    .fetch_optional(pool)
    .await?;

    match found {
        Some((name, kind)) => {
            info!(name = %name, kind = %kind, "read view found in database");
            Ok(())
        }
        None => bail!("table or view '{VIEW_NAME}' not found in database"),
    }
}

/// One raw row of the view. Every column is nullable because the scraper
/// writes best-effort data.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ViewRow {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub image_url: Option<String>,
    pub image_width: Option<i64>,
    pub image_height: Option<i64>,
    pub image_extension: Option<String>,
    /// Stored in bytes.
    pub image_weight: Option<i64>,
    /// Stored as 0/1.
    pub has_video: Option<i64>,
    pub source: Option<String>,
    /// Naive local timestamps, assumed UTC.
    pub published_at: Option<String>,
    pub fetched_at: Option<String>,
}

impl ViewRow {
    pub fn into_record(self, index: usize) -> Record {
        let url = self.url.unwrap_or_default();
        let url_prefix = if url.is_empty() {
            "unknown".to_string()
        } else {
            url.chars().take(20).collect()
        };

        Record {
            id: format!("id-{index}-{url_prefix}"),
            url,
            domain: self.domain.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            image_width: clamp_dimension(self.image_width),
            image_height: clamp_dimension(self.image_height),
            image_extension: self.image_extension.unwrap_or_default(),
            image_weight: bytes_to_kilobytes(self.image_weight.unwrap_or(0)),
            has_video: self.has_video.unwrap_or(0) != 0,
            source: self.source.unwrap_or_default(),
            published_at: parse_instant(self.published_at.as_deref()),
            fetched_at: parse_instant(self.fetched_at.as_deref()),
        }
    }
}

fn clamp_dimension(raw: Option<i64>) -> u32 {
    raw.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
}

/// Weight is stored in bytes; the core works in rounded kilobytes.
fn bytes_to_kilobytes(bytes: i64) -> f64 {
    (bytes.max(0) as f64 / 1024.0).round()
}

/// Parse a stored timestamp, trying RFC 3339 first and the two naive
/// layouts SQLite actually holds. Unparseable values fall back to now,
/// matching the proxy's original behavior.
fn parse_instant(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw else {
        return Utc::now();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return naive.and_utc();
        }
    }
    Utc::now()
}

/// Read the whole view.
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Record>> {
    let rows: Vec<ViewRow> = sqlx::query_as(SELECT_COLUMNS).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| row.into_record(index))
        .collect())
}

/// Optional equality predicates pushed down to SQL.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub domain: Option<String>,
    pub source: Option<String>,
    pub extension: Option<String>,
    pub has_video: Option<bool>,
}

/// Read the view with the given predicates applied.
pub async fn fetch_filtered(pool: &SqlitePool, filter: &ViewFilter) -> Result<Vec<Record>> {
    let mut query: sqlx::QueryBuilder<sqlx::Sqlite> = sqlx::QueryBuilder::new(SELECT_COLUMNS);
    query.push(" WHERE 1=1");

    if let Some(domain) = &filter.domain {
        query.push(" AND domain = ").push_bind(domain.as_str());
    }
    if let Some(source) = &filter.source {
        query.push(" AND source = ").push_bind(source.as_str());
    }
    if let Some(extension) = &filter.extension {
        query.push(" AND image_extension = ").push_bind(extension.as_str());
    }
    if let Some(has_video) = filter.has_video {
        query
            .push(" AND has_video = ")
            .push_bind(if has_video { 1i64 } else { 0i64 });
    }

    let rows: Vec<ViewRow> = query.build_query_as().fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| row.into_record(index))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn empty_row() -> ViewRow {
        ViewRow {
            url: None,
            domain: None,
            image_url: None,
            image_width: None,
            image_height: None,
            image_extension: None,
            image_weight: None,
            has_video: None,
            source: None,
            published_at: None,
            fetched_at: None,
        }
    }

    #[test]
    fn test_bytes_to_kilobytes_rounds_to_nearest() {
        assert_eq!(bytes_to_kilobytes(0), 0.0);
        assert_eq!(bytes_to_kilobytes(1024), 1.0);
        assert_eq!(bytes_to_kilobytes(1536), 2.0); // 1.5 KB rounds up
        assert_eq!(bytes_to_kilobytes(1535), 1.0);
        assert_eq!(bytes_to_kilobytes(-10), 0.0);
    }

    #[test]
    fn test_parse_instant_layouts() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(parse_instant(Some("2024-03-05T14:30:00Z")), expected);
        assert_eq!(parse_instant(Some("2024-03-05 14:30:00")), expected);
        assert_eq!(parse_instant(Some("2024-03-05T14:30:00")), expected);
    }

    #[test]
    fn test_parse_instant_garbage_falls_back_to_now() {
        let before = Utc::now();
        let parsed = parse_instant(Some("not a timestamp"));
        assert!(parsed >= before);
    }

    #[test]
    fn test_into_record_defaults_for_null_row() {
        let record = empty_row().into_record(3);
        assert_eq!(record.id, "id-3-unknown");
        assert_eq!(record.url, "");
        assert_eq!(record.image_width, 0);
        assert_eq!(record.image_weight, 0.0);
        assert!(!record.has_video);
    }

    #[test]
    fn test_into_record_conversions() {
        let mut row = empty_row();
        row.url = Some("https://www.example.it/articolo-lungo-slug".to_string());
        row.image_weight = Some(2048);
        row.has_video = Some(1);
        row.image_width = Some(1280);
        row.published_at = Some("2024-01-02 08:00:00".to_string());

        let record = row.into_record(0);
        assert_eq!(record.id, "id-0-https://www.example.");
        assert_eq!(record.image_weight, 2.0);
        assert!(record.has_video);
        assert_eq!(record.image_width, 1280);
        assert_eq!(
            record.published_at,
            Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap()
        );
    }
}
