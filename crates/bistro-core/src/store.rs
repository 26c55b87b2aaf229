//! Single source of truth for restaurant and review state.

use std::rc::Rc;

use bistro_reactive::Observable;

use crate::api::RestaurantApi;
use crate::error::ApiError;
use crate::model::{Restaurant, Review};

/// Owns the restaurant descriptor and the mutable review list, exposing
/// both as observables.
///
/// Created once at boot and never torn down during normal operation. Every
/// reviews emission is a freshly allocated list; that is what makes the
/// identity-based change detection of the observable fire, so downstream
/// consumers refresh even when the new list compares equal to the old one.
/// Consumers must treat received lists as read-only snapshots.
pub struct RestaurantStore {
    api: Rc<dyn RestaurantApi>,
    restaurant: Observable<Restaurant>,
    reviews: Observable<Vec<Review>>,
}

impl RestaurantStore {
    /// Seed the store from the data source.
    ///
    /// Fails if the collaborator cannot serve the seed descriptor or the
    /// initial review list.
    pub fn new(api: Rc<dyn RestaurantApi>) -> Result<Self, ApiError> {
        let restaurant = Observable::new(api.get_restaurant()?);
        let reviews = Observable::new(api.get_reviews()?);
        Ok(Self {
            api,
            restaurant,
            reviews,
        })
    }

    /// The seed restaurant descriptor. Never re-emitted.
    pub fn restaurant(&self) -> &Observable<Restaurant> {
        &self.restaurant
    }

    /// The current review list snapshot.
    pub fn reviews(&self) -> &Observable<Vec<Review>> {
        &self.reviews
    }

    /// Append `review` through the collaborator and re-emit the list.
    ///
    /// Validation lives with the caller; this trusts its input. If the
    /// collaborator fails, no emission happens and the error returns
    /// unchanged.
    pub fn append(&self, review: Review) -> Result<(), ApiError> {
        self.api.add_review(review)?;
        let updated = self.api.get_reviews()?;
        tracing::debug!(total = updated.len(), "review appended, re-emitting list");
        self.reviews.set(updated);
        Ok(())
    }
}
