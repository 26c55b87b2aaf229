//! Derived observable keeping review statistics current.

use bistro_reactive::{Observable, Subscription};

use crate::model::ReviewStats;
use crate::store::RestaurantStore;

/// Watches the store's review list and recomputes [`ReviewStats`] on every
/// emission.
///
/// The aggregator is itself a synchronous observer of the reviews
/// observable, so a stats emission is always delivered after the reviews
/// emission that caused it. Subscription replay populates the stats cell
/// immediately at construction.
pub struct StatsAggregator {
    stats: Observable<ReviewStats>,
    _reviews: Subscription,
}

impl StatsAggregator {
    /// Attach to `store` and start deriving.
    pub fn new(store: &RestaurantStore) -> Self {
        let stats: Observable<ReviewStats> = Observable::unset();
        let out = stats.clone();
        let subscription = store.reviews().subscribe(move |reviews| {
            let computed = ReviewStats::from_reviews(reviews);
            tracing::trace!(count = computed.review_count, "review stats recomputed");
            out.set(computed);
        });
        Self {
            stats,
            _reviews: subscription,
        }
    }

    /// The derived stats observable. Each emission is a fresh value.
    pub fn stats(&self) -> &Observable<ReviewStats> {
        &self.stats
    }
}
