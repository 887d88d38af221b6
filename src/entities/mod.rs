use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path segment that marks a generic "no image available" asset.
pub const PLACEHOLDER_SEGMENT: &str = "/og/";

/// --- Derived label enums ---

/// Bucketed image width quality. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum QualityClass {
    Low,      // width <= 799
    Medium,   // 800..=1199
    High,     // 1200..=1999
    VeryHigh, // >= 2000
    NoImage,  // image_url contains the placeholder segment
}

impl QualityClass {
    pub const ALL: [QualityClass; 5] = [
        QualityClass::Low,
        QualityClass::Medium,
        QualityClass::High,
        QualityClass::VeryHigh,
        QualityClass::NoImage,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
    Unknown,
}

/// Editorial content type, derived from the last path segment of the
/// article URL ("sch-" prefix, "-sck" suffix, everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ContentType {
    Card,
    FlashCard,
    Article,
}

/// --- Records ---

/// One scraped article/image metadata entry, as served by the read view.
///
/// Width and height of 0 mean "unknown/missing". Weight is kilobytes,
/// already converted from the stored byte count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    pub id: String,
    pub url: String,
    pub domain: String,
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_extension: String,
    pub image_weight: f64,
    pub has_video: bool,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub fetched_at: DateTime<Utc>,
}

impl Record {
    /// Whether the image URL denotes the reserved placeholder asset.
    pub fn is_placeholder(&self) -> bool {
        self.image_url.contains(PLACEHOLDER_SEGMENT)
    }
}
