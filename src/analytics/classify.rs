use url::Url;

use crate::entities::{ContentType, Orientation, QualityClass, Record};

const MEDIUM_MIN_WIDTH: u32 = 800;
const HIGH_MIN_WIDTH: u32 = 1200;
const VERY_HIGH_MIN_WIDTH: u32 = 2000;

const CARD_PREFIX: &str = "sch-";
const FLASH_CARD_SUFFIX: &str = "-sck";

/// Bucket a record by image width. Placeholder images are classified as
/// NoImage regardless of width.
pub fn classify_quality(record: &Record) -> QualityClass {
    if record.is_placeholder() {
        return QualityClass::NoImage;
    }
    match record.image_width {
        w if w < MEDIUM_MIN_WIDTH => QualityClass::Low,
        w if w < HIGH_MIN_WIDTH => QualityClass::Medium,
        w if w < VERY_HIGH_MIN_WIDTH => QualityClass::High,
        _ => QualityClass::VeryHigh,
    }
}

pub fn classify_orientation(record: &Record) -> Orientation {
    if record.image_width == 0 || record.image_height == 0 {
        return Orientation::Unknown;
    }
    if record.image_width > record.image_height {
        Orientation::Landscape
    } else if record.image_height > record.image_width {
        Orientation::Portrait
    } else {
        Orientation::Square
    }
}

/// Derive the content type from the last non-empty path segment of the
/// article URL. Fails open: anything unparseable is an Article.
pub fn classify_content_type(url: &str) -> ContentType {
    let Ok(parsed) = Url::parse(url) else {
        return ContentType::Article;
    };

    let basename = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("");

    if basename.starts_with(CARD_PREFIX) {
        ContentType::Card
    } else if basename.ends_with(FLASH_CARD_SUFFIX) {
        ContentType::FlashCard
    } else {
        ContentType::Article
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::tests::record_with_image;

    #[test]
    fn test_quality_boundary_widths() {
        let cases = [
            (0, QualityClass::Low),
            (799, QualityClass::Low),
            (800, QualityClass::Medium),
            (1199, QualityClass::Medium),
            (1200, QualityClass::High),
            (1999, QualityClass::High),
            (2000, QualityClass::VeryHigh),
            (4096, QualityClass::VeryHigh),
        ];
        for (width, expected) in cases {
            let record = record_with_image("https://cdn.x.it/img/a.jpg", width, 600);
            assert_eq!(classify_quality(&record), expected, "width {}", width);
        }
    }

    #[test]
    fn test_quality_placeholder_wins_over_width() {
        let record = record_with_image("https://cdn.x.it/og/default.png", 2500, 1400);
        assert_eq!(classify_quality(&record), QualityClass::NoImage);
    }

    #[test]
    fn test_orientation() {
        let landscape = record_with_image("https://cdn.x.it/img/a.jpg", 800, 600);
        let portrait = record_with_image("https://cdn.x.it/img/a.jpg", 600, 800);
        let square = record_with_image("https://cdn.x.it/img/a.jpg", 1, 1);
        assert_eq!(classify_orientation(&landscape), Orientation::Landscape);
        assert_eq!(classify_orientation(&portrait), Orientation::Portrait);
        assert_eq!(classify_orientation(&square), Orientation::Square);
    }

    #[test]
    fn test_orientation_unknown_on_missing_dimension() {
        let no_width = record_with_image("https://cdn.x.it/img/a.jpg", 0, 600);
        let no_height = record_with_image("https://cdn.x.it/img/a.jpg", 800, 0);
        assert_eq!(classify_orientation(&no_width), Orientation::Unknown);
        assert_eq!(classify_orientation(&no_height), Orientation::Unknown);
    }

    #[test]
    fn test_content_type_from_basename() {
        assert_eq!(
            classify_content_type("https://x.it/a/sch-foo"),
            ContentType::Card
        );
        assert_eq!(
            classify_content_type("https://x.it/a/bar-sck"),
            ContentType::FlashCard
        );
        assert_eq!(
            classify_content_type("https://x.it/a/plain"),
            ContentType::Article
        );
    }

    #[test]
    fn test_content_type_ignores_trailing_slash() {
        assert_eq!(
            classify_content_type("https://x.it/sch-foo/"),
            ContentType::Card
        );
    }

    #[test]
    fn test_content_type_fails_open_on_malformed_url() {
        assert_eq!(classify_content_type("not a url"), ContentType::Article);
        assert_eq!(classify_content_type(""), ContentType::Article);
    }
}
