//! Aggregated review statistics.

use serde::{Deserialize, Serialize};

use super::Review;

/// Aggregates derived from a review list, ready for display.
///
/// `rating_distribution[i]` counts reviews rated `i + 1` stars;
/// `percent_distribution[i]` is the floored percentage of **all** reviews
/// that carry that rating. Reviews with a rate outside `1..=5` are excluded
/// from the average's numerator and from the distribution, but still count
/// in `review_count` and in the percentage denominator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewStats {
    /// Arithmetic mean of in-range ratings over the full review count.
    /// `0.0` when there are no reviews.
    pub average_rating: f32,
    /// Total number of reviews, including out-of-range rates.
    pub review_count: u32,
    /// Count of reviews per star level, 1 star at index 0.
    pub rating_distribution: [u32; 5],
    /// Floored percentage of reviews per star level, in `0..=100`.
    pub percent_distribution: [u32; 5],
}

impl ReviewStats {
    /// Stats for an empty review list: everything zero.
    pub fn empty() -> Self {
        Self {
            average_rating: 0.0,
            review_count: 0,
            rating_distribution: [0; 5],
            percent_distribution: [0; 5],
        }
    }

    /// Compute stats over `reviews`.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::empty();
        }

        let mut distribution = [0u32; 5];
        let mut sum = 0u32;
        for review in reviews {
            if (1..=5).contains(&review.rate) {
                distribution[usize::from(review.rate) - 1] += 1;
                sum += u32::from(review.rate);
            }
        }

        let count = reviews.len() as u32;
        let average = sum as f32 / count as f32;

        let mut percent = [0u32; 5];
        for (pct, dist) in percent.iter_mut().zip(distribution.iter()) {
            *pct = dist * 100 / count;
        }

        Self {
            average_rating: average,
            review_count: count,
            rating_distribution: distribution,
            percent_distribution: percent,
        }
    }
}

impl Default for ReviewStats {
    fn default() -> Self {
        Self::empty()
    }
}
