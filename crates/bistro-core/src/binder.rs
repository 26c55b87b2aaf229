//! View contracts and the glue binding them to the observables.
//!
//! The core does not render anything; it constrains how the two screens
//! interact with the observables. Each binder owns an
//! [`ObserverScope`], so dropping the binder (the view's lifetime ending)
//! releases every registration it made.

use std::cell::RefCell;
use std::rc::Rc;

use bistro_reactive::ObserverScope;

use crate::aggregator::StatsAggregator;
use crate::error::ApiError;
use crate::flow::ReviewFlow;
use crate::model::{Restaurant, Review, ReviewStats};
use crate::store::RestaurantStore;

/// Confirmation shown by the review-list view after a successful
/// submission. Emitted by the binder, not the flow.
pub const SUBMIT_CONFIRMATION: &str = "Avis ajouté avec succès";

/// Rendering contract of the details screen.
///
/// Both records arrive whole; the view never assembles partial state.
pub trait DetailsView {
    /// Render the restaurant descriptor.
    fn show_restaurant(&mut self, restaurant: &Restaurant);
    /// Render the aggregated review statistics.
    fn show_stats(&mut self, stats: &ReviewStats);
}

/// Subscribes a [`DetailsView`] to the restaurant descriptor and the
/// derived statistics.
pub struct DetailsBinder {
    scope: ObserverScope,
}

impl DetailsBinder {
    /// Bind `view` for as long as the returned binder lives.
    pub fn bind<V: DetailsView + 'static>(
        store: &RestaurantStore,
        aggregator: &StatsAggregator,
        view: Rc<RefCell<V>>,
    ) -> Self {
        let mut scope = ObserverScope::new();

        let v = Rc::clone(&view);
        scope.subscribe(store.restaurant(), move |restaurant| {
            v.borrow_mut().show_restaurant(restaurant);
        });

        let v = view;
        scope.subscribe(aggregator.stats(), move |stats| {
            v.borrow_mut().show_stats(stats);
        });

        Self { scope }
    }

    /// Release all registrations now; the binder becomes inert.
    pub fn unbind(&mut self) {
        self.scope.clear();
    }
}

/// Rendering contract of the review-list screen.
pub trait ReviewListView {
    /// Render the restaurant name in the header.
    fn show_restaurant_name(&mut self, name: &str);
    /// Render the review list. Called with every emission.
    fn show_reviews(&mut self, reviews: &[Review]);
    /// Move the viewport to the head of the list, so a just-appended
    /// review is immediately visible.
    fn scroll_to_top(&mut self);
    /// Show (`Some`) or clear (`None`) the inline comment error.
    fn show_comment_error(&mut self, message: Option<&str>);
    /// Show the transient rating error.
    fn show_rating_error(&mut self, message: &str);
    /// Clear the comment input and the rating selector.
    fn clear_inputs(&mut self);
    /// Show the transient submission confirmation.
    fn show_confirmation(&mut self, message: &str);
}

/// Subscribes a [`ReviewListView`] to the store and the submission flow,
/// and forwards user input back to the flow.
pub struct ReviewListBinder {
    flow: Rc<ReviewFlow>,
    scope: ObserverScope,
}

impl ReviewListBinder {
    /// Bind `view` for as long as the returned binder lives.
    pub fn bind<V: ReviewListView + 'static>(
        store: &RestaurantStore,
        flow: Rc<ReviewFlow>,
        view: Rc<RefCell<V>>,
    ) -> Self {
        let mut scope = ObserverScope::new();

        let v = Rc::clone(&view);
        scope.subscribe(store.restaurant(), move |restaurant: &Restaurant| {
            v.borrow_mut().show_restaurant_name(&restaurant.name);
        });

        let v = Rc::clone(&view);
        scope.subscribe(store.reviews(), move |reviews: &Vec<Review>| {
            let mut view = v.borrow_mut();
            view.show_reviews(reviews);
            view.scroll_to_top();
        });

        let v = Rc::clone(&view);
        scope.subscribe(flow.comment_error(), move |error| {
            let message = error.as_ref().map(|e| e.to_string());
            v.borrow_mut().show_comment_error(message.as_deref());
        });

        let v = Rc::clone(&view);
        scope.subscribe(flow.rating_error(), move |error| {
            if let Some(error) = error {
                v.borrow_mut().show_rating_error(&error.to_string());
            }
        });

        let v = view;
        let consumer = Rc::clone(&flow);
        scope.subscribe(flow.submit_success(), move |success| {
            if *success {
                {
                    let mut view = v.borrow_mut();
                    view.clear_inputs();
                    view.show_confirmation(SUBMIT_CONFIRMATION);
                }
                // Consume the one-shot event. This re-enters the success
                // cell mid-dispatch; the cell defers the false emission
                // until the current one finishes.
                consumer.reset_success();
            }
        });

        Self { flow, scope }
    }

    /// Forward user input to the submission flow. Trims the comment the
    /// way the input widget does before handing it over.
    pub fn submit(&self, comment: &str, rating: u8) -> Result<(), ApiError> {
        self.flow.process(comment.trim(), rating)
    }

    /// Release all registrations now; the binder becomes inert.
    pub fn unbind(&mut self) {
        self.scope.clear();
    }
}
