use serde::Serialize;

use crate::entities::Record;

const TRASH_LIMIT: usize = 10;
const LOW_RES_WIDTH: u32 = 300;
const LOW_RES_PENALTY: f64 = 5.0;

/// A record flagged for review, with its badness score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrashEntry {
    pub record: Record,
    pub trash_score: f64,
}

/// Rank the worst images: weight per pixel, multiplied by a penalty for
/// very low resolutions. Placeholder records are excluded entirely.
///
/// The primary sort key is image width ascending, so dimension defects
/// surface before weight-efficiency defects; the score only breaks ties
/// between equal widths. Returns at most the top 10.
pub fn rank_trash(records: &[Record]) -> Vec<TrashEntry> {
    let mut entries: Vec<TrashEntry> = records
        .iter()
        .filter(|r| !r.is_placeholder())
        .map(|r| {
            // Guard against zero-area division for unknown dimensions.
            let pixels = (u64::from(r.image_width) * u64::from(r.image_height)).max(1) as f64;
            let efficiency = r.image_weight / pixels;
            let penalty = if r.image_width < LOW_RES_WIDTH {
                LOW_RES_PENALTY
            } else {
                1.0
            };
            TrashEntry {
                record: r.clone(),
                trash_score: efficiency * penalty,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.record
            .image_width
            .cmp(&b.record.image_width)
            .then_with(|| b.trash_score.total_cmp(&a.trash_score))
    });
    entries.truncate(TRASH_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::tests::record_with_image;

    #[test]
    fn test_placeholders_are_never_ranked() {
        let records = vec![
            record_with_image("https://cdn.x.it/og/default.png", 100, 100),
            record_with_image("https://cdn.x.it/img/a.jpg", 800, 600),
        ];

        let ranked = rank_trash(&records);
        assert_eq!(ranked.len(), 1);
        assert!(!ranked[0].record.is_placeholder());
    }

    #[test]
    fn test_narrower_width_ranks_first_regardless_of_score() {
        // Equal weight-per-pixel efficiency; the 200px record also takes the
        // low-res penalty, but width alone should already put it on top.
        let mut narrow = record_with_image("https://cdn.x.it/img/narrow.jpg", 200, 100);
        narrow.image_weight = 20.0;
        let mut wide = record_with_image("https://cdn.x.it/img/wide.jpg", 400, 200);
        wide.image_weight = 80.0;

        let ranked = rank_trash(&[wide, narrow]);
        assert_eq!(ranked[0].record.image_width, 200);
        assert_eq!(ranked[1].record.image_width, 400);
    }

    #[test]
    fn test_score_breaks_ties_on_equal_width() {
        let mut heavy = record_with_image("https://cdn.x.it/img/heavy.jpg", 400, 200);
        heavy.image_weight = 500.0;
        let mut light = record_with_image("https://cdn.x.it/img/light.jpg", 400, 200);
        light.image_weight = 10.0;

        let ranked = rank_trash(&[light.clone(), heavy.clone()]);
        assert_eq!(ranked[0].record.id, heavy.id);
        assert_eq!(ranked[1].record.id, light.id);
        assert!(ranked[0].trash_score > ranked[1].trash_score);
    }

    #[test]
    fn test_low_res_penalty_applied() {
        let mut low_res = record_with_image("https://cdn.x.it/img/low.jpg", 299, 100);
        low_res.image_weight = 10.0;

        let ranked = rank_trash(&[low_res.clone()]);
        let pixels = 299.0 * 100.0;
        assert!((ranked[0].trash_score - (10.0 / pixels) * 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_area_guard() {
        let mut unknown = record_with_image("https://cdn.x.it/img/unknown.jpg", 0, 0);
        unknown.image_weight = 50.0;

        let ranked = rank_trash(&[unknown]);
        assert!(ranked[0].trash_score.is_finite());
        // pixels clamp to 1, width 0 takes the low-res penalty
        assert_eq!(ranked[0].trash_score, 250.0);
    }

    #[test]
    fn test_output_capped_at_ten_and_empty_input() {
        let records: Vec<_> = (0..15)
            .map(|i| record_with_image(&format!("https://cdn.x.it/img/{i}.jpg"), 400 + i, 300))
            .collect();
        assert_eq!(rank_trash(&records).len(), 10);
        assert!(rank_trash(&[]).is_empty());
    }
}
