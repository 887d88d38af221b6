//! Synthetic record generator, the fallback when the data API is
//! unreachable. The distributions mirror what the scraper actually
//! produces: a bias toward standard image widths, roughly 10% placeholder
//! images, weights between 10 and 510 KB.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, thread_rng};

use crate::entities::Record;

const DOMAINS: [&str; 5] = [
    "repubblica.it",
    "corriere.it",
    "gazzetta.it",
    "ansa.it",
    "wired.it",
];
const EXTENSIONS: [&str; 4] = ["jpg", "png", "webp", "gif"];
const SOURCES: [&str; 5] = [
    "Redazione Milano",
    "Redazione Roma",
    "Esteri",
    "Sport Desk",
    "Tech Team",
];
const STANDARD_WIDTHS: [u32; 4] = [640, 1080, 1200, 1920];
const PLACEHOLDER_IMAGE_URL: &str = "https://example.com/og/default.png";

pub fn generate(count: usize) -> Vec<Record> {
    generate_at(count, Utc::now())
}

/// Deterministic in shape but not in values; `now` anchors the trailing
/// three-month publication window so tests can pin it.
pub fn generate_at(count: usize, now: DateTime<Utc>) -> Vec<Record> {
    let mut rng = thread_rng();
    let window_start = now - Duration::days(90);

    (0..count)
        .map(|i| {
            let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
            let url = generate_url(&mut rng, domain);

            let is_placeholder = rng.gen_bool(0.10);
            let image_url = if is_placeholder {
                PLACEHOLDER_IMAGE_URL.to_string()
            } else {
                format!("https://picsum.photos/id/{i}/800/600")
            };

            // Skewed width distribution, biased toward standard sizes.
            let mut width = rng.gen_range(200..2700);
            if rng.gen_bool(0.5) {
                width = STANDARD_WIDTHS[rng.gen_range(0..STANDARD_WIDTHS.len())];
            }
            let height = (f64::from(width) * rng.gen_range(0.5..1.0)) as u32;

            Record {
                id: format!("id-{i}"),
                url,
                domain: domain.to_string(),
                image_url,
                image_width: if is_placeholder { 0 } else { width },
                image_height: if is_placeholder { 0 } else { height },
                image_extension: EXTENSIONS[rng.gen_range(0..EXTENSIONS.len())].to_string(),
                image_weight: f64::from(rng.gen_range(10..510)),
                has_video: rng.gen_bool(0.3),
                source: SOURCES[rng.gen_range(0..SOURCES.len())].to_string(),
                published_at: random_instant(&mut rng, window_start, now),
                fetched_at: random_instant(&mut rng, window_start, now),
            }
        })
        .collect()
}

fn generate_url<R: Rng>(rng: &mut R, domain: &str) -> String {
    let slug: String = (0..7)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect();

    // Roughly 20% cards, 20% flash cards, the rest plain articles.
    let roll: f64 = rng.r#gen();
    if roll < 0.2 {
        format!("https://www.{domain}/sch-{slug}")
    } else if roll < 0.4 {
        format!("https://www.{domain}/{slug}-sck")
    } else {
        format!("https://www.{domain}/articolo-{slug}")
    }
}

fn random_instant<R: Rng>(rng: &mut R, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
    let span = (end - start).num_seconds().max(1);
    start + Duration::seconds(rng.gen_range(0..span))
}
