//! Data-source seam for restaurant and review access.

use std::cell::RefCell;

use serde::Deserialize;

use crate::error::ApiError;
use crate::model::{Restaurant, Review};

/// Collaborator serving the restaurant descriptor and the review list.
///
/// The store reads `get_reviews` again after every `add_review` to obtain
/// the authoritative updated list, so implementations must reflect appended
/// reviews in subsequent reads.
pub trait RestaurantApi {
    /// The seed restaurant descriptor.
    fn get_restaurant(&self) -> Result<Restaurant, ApiError>;

    /// The current review list.
    fn get_reviews(&self) -> Result<Vec<Review>, ApiError>;

    /// Append a review to the underlying storage.
    fn add_review(&self, review: Review) -> Result<(), ApiError>;
}

/// Embedded seed fixture: one restaurant and its initial reviews.
const SEED_JSON: &str = include_str!("seed.json");

#[derive(Deserialize)]
struct SeedData {
    restaurant: Restaurant,
    reviews: Vec<Review>,
}

/// Process-local [`RestaurantApi`] backed by a plain `Vec`.
///
/// This is the only data source the system ships; it is created once at
/// boot and lives for the process. Single-threaded by design, like the rest
/// of the core.
pub struct InMemoryRestaurantApi {
    restaurant: Restaurant,
    reviews: RefCell<Vec<Review>>,
}

impl InMemoryRestaurantApi {
    /// Build from the embedded seed fixture.
    pub fn seeded() -> Result<Self, ApiError> {
        let seed: SeedData = serde_json::from_str(SEED_JSON)?;
        Ok(Self::with_data(seed.restaurant, seed.reviews))
    }

    /// Build from explicit data, e.g. an empty review list for tests.
    pub fn with_data(restaurant: Restaurant, reviews: Vec<Review>) -> Self {
        Self {
            restaurant,
            reviews: RefCell::new(reviews),
        }
    }
}

impl RestaurantApi for InMemoryRestaurantApi {
    fn get_restaurant(&self) -> Result<Restaurant, ApiError> {
        Ok(self.restaurant.clone())
    }

    fn get_reviews(&self) -> Result<Vec<Review>, ApiError> {
        Ok(self.reviews.borrow().clone())
    }

    fn add_review(&self, review: Review) -> Result<(), ApiError> {
        self.reviews.borrow_mut().push(review);
        Ok(())
    }
}
