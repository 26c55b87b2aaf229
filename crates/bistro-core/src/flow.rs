//! Review submission: validation, append, success signalling.

use std::rc::Rc;

use bistro_reactive::Observable;

use crate::error::{ApiError, ValidationError};
use crate::model::Review;
use crate::profile::CurrentUser;
use crate::store::RestaurantStore;

/// Gate-keeps new reviews and signals the outcome to the view.
///
/// Exposes three observables: the two field validation errors (`None` when
/// the field is valid) and a one-shot success cell that the view consumes
/// and resets. Validation is recovered locally and never returned as an
/// error; only collaborator failures surface through the `Result`.
pub struct ReviewFlow {
    store: Rc<RestaurantStore>,
    user: CurrentUser,
    comment_error: Observable<Option<ValidationError>>,
    rating_error: Observable<Option<ValidationError>>,
    submit_success: Observable<bool>,
}

impl ReviewFlow {
    /// Create a flow submitting as the fixed current user.
    pub fn new(store: Rc<RestaurantStore>) -> Self {
        Self::with_user(store, CurrentUser::default())
    }

    /// Create a flow submitting as `user`.
    pub fn with_user(store: Rc<RestaurantStore>, user: CurrentUser) -> Self {
        Self {
            store,
            user,
            comment_error: Observable::unset(),
            rating_error: Observable::unset(),
            submit_success: Observable::unset(),
        }
    }

    /// The identity attached to submitted reviews.
    pub fn current_user(&self) -> &CurrentUser {
        &self.user
    }

    /// Last comment validation outcome; unset until the first `process`
    /// call, `None` once the comment validates.
    pub fn comment_error(&self) -> &Observable<Option<ValidationError>> {
        &self.comment_error
    }

    /// Last rating validation outcome.
    pub fn rating_error(&self) -> &Observable<Option<ValidationError>> {
        &self.rating_error
    }

    /// One-shot success signal. Set to `true` on acceptance; the view calls
    /// [`ReviewFlow::reset_success`] after acting on it.
    pub fn submit_success(&self) -> &Observable<bool> {
        &self.submit_success
    }

    /// Validate `(raw_comment, rating)` and append on success.
    ///
    /// The comment is trimmed here, so whitespace-only input counts as
    /// empty regardless of what the view did. `rating` is the star count
    /// from the input widget, `0` meaning "not selected". First validation
    /// failure wins; no later check runs.
    ///
    /// A collaborator failure propagates unchanged, leaves both error
    /// observables as they were and does not touch the success cell.
    pub fn process(&self, raw_comment: &str, rating: u8) -> Result<(), ApiError> {
        let comment = raw_comment.trim();

        if comment.is_empty() {
            tracing::debug!("review rejected: empty comment");
            self.comment_error.set(Some(ValidationError::EmptyComment));
            self.rating_error.set(None);
            return Ok(());
        }
        self.comment_error.set(None);

        if rating == 0 {
            tracing::debug!("review rejected: no rating selected");
            self.rating_error.set(Some(ValidationError::MissingRating));
            return Ok(());
        }
        self.rating_error.set(None);

        let review = Review::new(
            self.user.username.clone(),
            self.user.picture.clone(),
            comment,
            rating,
        );
        self.store.append(review)?;
        tracing::debug!(rating, "review accepted");
        self.submit_success.set(true);
        Ok(())
    }

    /// Set the success cell back to `false`. Idempotent; calling it on an
    /// already-consumed (or never-set) cell just stores `false` again.
    pub fn reset_success(&self) {
        self.submit_success.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::InMemoryRestaurantApi;
    use crate::model::Restaurant;

    fn restaurant() -> Restaurant {
        Restaurant {
            name: "Chez Test".into(),
            cuisine: "Indien".into(),
            address: "1 rue du Test".into(),
            hours: "12h - 22h".into(),
            phone: "01 02 03 04 05".into(),
            website: "https://example.com".into(),
            dine_in: true,
            take_away: true,
        }
    }

    fn flow_with_empty_store() -> (Rc<RestaurantStore>, ReviewFlow) {
        let api = Rc::new(InMemoryRestaurantApi::with_data(restaurant(), Vec::new()));
        let store = Rc::new(RestaurantStore::new(api).unwrap());
        let flow = ReviewFlow::new(Rc::clone(&store));
        (store, flow)
    }

    #[test]
    fn empty_comment_is_rejected_before_rating() {
        let (store, flow) = flow_with_empty_store();

        flow.process("", 5).unwrap();

        assert_eq!(
            *flow.comment_error().current().unwrap(),
            Some(ValidationError::EmptyComment)
        );
        assert_eq!(*flow.rating_error().current().unwrap(), None);
        assert!(flow.submit_success().current().is_none());
        assert!(store.reviews().current().unwrap().is_empty());
    }

    #[test]
    fn whitespace_only_comment_counts_as_empty() {
        let (_store, flow) = flow_with_empty_store();
        flow.process("   \t ", 4).unwrap();
        assert_eq!(
            *flow.comment_error().current().unwrap(),
            Some(ValidationError::EmptyComment)
        );
    }

    #[test]
    fn missing_rating_is_rejected_after_comment_passes() {
        let (store, flow) = flow_with_empty_store();

        flow.process("Great restaurant!", 0).unwrap();

        assert_eq!(*flow.comment_error().current().unwrap(), None);
        assert_eq!(
            *flow.rating_error().current().unwrap(),
            Some(ValidationError::MissingRating)
        );
        assert!(store.reviews().current().unwrap().is_empty());
    }

    #[test]
    fn valid_submission_appends_as_the_current_user() {
        let (store, flow) = flow_with_empty_store();

        flow.process("Très bon service", 4).unwrap();

        let reviews = store.reviews().current().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].username, "Manon Garcia");
        assert_eq!(
            reviews[0].picture,
            "https://xsgames.co/randomusers/assets/avatars/female/20.jpg"
        );
        assert_eq!(reviews[0].comment, "Très bon service");
        assert_eq!(reviews[0].rate, 4);

        assert_eq!(*flow.submit_success().current().unwrap(), true);
        assert_eq!(*flow.comment_error().current().unwrap(), None);
        assert_eq!(*flow.rating_error().current().unwrap(), None);
    }

    #[test]
    fn comment_is_trimmed_before_storage() {
        let (store, flow) = flow_with_empty_store();
        flow.process("  Excellent !  ", 5).unwrap();
        assert_eq!(store.reviews().current().unwrap()[0].comment, "Excellent !");
    }

    #[test]
    fn custom_user_identity_flows_through() {
        let api = Rc::new(InMemoryRestaurantApi::with_data(restaurant(), Vec::new()));
        let store = Rc::new(RestaurantStore::new(api).unwrap());
        let user = CurrentUser {
            username: "Jean Dupont".into(),
            picture: "https://example.com/jean.jpg".into(),
        };
        let flow = ReviewFlow::with_user(Rc::clone(&store), user);

        flow.process("Bien", 3).unwrap();
        assert_eq!(store.reviews().current().unwrap()[0].username, "Jean Dupont");
    }

    #[test]
    fn reset_consumes_the_success_event_idempotently() {
        let (_store, flow) = flow_with_empty_store();

        flow.process("Great!", 5).unwrap();
        assert_eq!(*flow.submit_success().current().unwrap(), true);

        flow.reset_success();
        assert_eq!(*flow.submit_success().current().unwrap(), false);

        flow.reset_success();
        assert_eq!(*flow.submit_success().current().unwrap(), false);
    }

    #[test]
    fn at_most_one_error_after_any_process_call() {
        let (_store, flow) = flow_with_empty_store();

        for (comment, rating) in [("", 0u8), ("", 3), ("ok", 0), ("ok", 4)] {
            flow.process(comment, rating).unwrap();
            let comment_set = flow.comment_error().current().unwrap().is_some();
            let rating_set = flow
                .rating_error()
                .current()
                .map_or(false, |e| e.is_some());
            assert!(
                !(comment_set && rating_set),
                "both errors set for ({comment:?}, {rating})"
            );
        }
    }

    #[test]
    fn collaborator_failure_propagates_and_touches_nothing() {
        struct RefusingApi;
        impl crate::api::RestaurantApi for RefusingApi {
            fn get_restaurant(&self) -> Result<Restaurant, ApiError> {
                Ok(restaurant())
            }
            fn get_reviews(&self) -> Result<Vec<crate::model::Review>, ApiError> {
                Ok(Vec::new())
            }
            fn add_review(&self, _review: crate::model::Review) -> Result<(), ApiError> {
                Err(ApiError::Unavailable("storage offline".into()))
            }
        }

        let store = Rc::new(RestaurantStore::new(Rc::new(RefusingApi)).unwrap());
        let flow = ReviewFlow::new(Rc::clone(&store));

        let result = flow.process("Très bon service", 4);
        assert!(result.is_err());

        // Validation had already cleared both errors; success stays unset.
        assert_eq!(*flow.comment_error().current().unwrap(), None);
        assert_eq!(*flow.rating_error().current().unwrap(), None);
        assert!(flow.submit_success().current().is_none());
    }
}
