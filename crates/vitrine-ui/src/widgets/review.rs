//! Review row projection.

use vitrine_catalog::ProductReview;

pub const MAX_STARS: u8 = 5;

pub(crate) fn clamp_stars(rating: f32) -> u8 {
    rating.round().clamp(0.0, MAX_STARS as f32) as u8
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewModel {
    pub stars_filled: u8,
    pub stars_total: u8,
    pub text: String,
    pub age_label: String,
}

/// Project a review for display at the given wall-clock time.
pub fn review_row(review: &ProductReview, now_epoch_seconds: u64) -> ReviewModel {
    ReviewModel {
        stars_filled: clamp_stars(review.rating),
        stars_total: MAX_STARS,
        text: review.review.clone(),
        age_label: relative_age(review.created_at, now_epoch_seconds),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Coarse relative timestamp. Future timestamps (clock skew) read as now.
fn relative_age(created_at: u64, now: u64) -> String {
    let elapsed = now.saturating_sub(created_at);
    match elapsed {
        0..=59 => "just now".to_string(),
        60..=3_599 => plural(elapsed / 60, "minute"),
        3_600..=86_399 => plural(elapsed / 3_600, "hour"),
        86_400..=2_591_999 => plural(elapsed / 86_400, "day"),
        2_592_000..=31_535_999 => plural(elapsed / 2_592_000, "month"),
        _ => plural(elapsed / 31_536_000, "year"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_at(created_at: u64, rating: f32) -> ProductReview {
        ProductReview {
            id: 1,
            rating,
            review: "solid value".to_string(),
            created_at,
        }
    }

    #[test]
    fn ratings_clamp_to_the_star_range() {
        assert_eq!(review_row(&review_at(0, 9.7), 0).stars_filled, 5);
        assert_eq!(review_row(&review_at(0, -2.0), 0).stars_filled, 0);
        assert_eq!(review_row(&review_at(0, 3.4), 0).stars_filled, 3);
    }

    #[test]
    fn age_labels_scale_with_elapsed_time() {
        let now = 1_700_000_000;
        assert_eq!(review_row(&review_at(now - 30, 4.0), now).age_label, "just now");
        assert_eq!(
            review_row(&review_at(now - 120, 4.0), now).age_label,
            "2 minutes ago"
        );
        assert_eq!(
            review_row(&review_at(now - 3_600, 4.0), now).age_label,
            "1 hour ago"
        );
        assert_eq!(
            review_row(&review_at(now - 3 * 86_400, 4.0), now).age_label,
            "3 days ago"
        );
        assert_eq!(
            review_row(&review_at(now - 40 * 86_400, 4.0), now).age_label,
            "1 month ago"
        );
    }

    #[test]
    fn future_timestamps_read_as_now() {
        let now = 1_700_000_000;
        assert_eq!(
            review_row(&review_at(now + 500, 4.0), now).age_label,
            "just now"
        );
    }
}
