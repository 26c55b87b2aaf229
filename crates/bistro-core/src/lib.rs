//! Restaurant profile and review domain for the bistro workspace.
//!
//! This crate owns the session state of a single restaurant screen pair:
//!
//! - **Model**: `Restaurant`, `Review`, `ReviewStats` value types
//! - **Store**: the single source of truth, exposing restaurant and reviews
//!   as observables and appending through the [`api::RestaurantApi`] seam
//! - **Aggregator**: a derived observable keeping `ReviewStats` in sync
//!   with the review list
//! - **Flow**: review submission with ordered validation and a one-shot
//!   success signal
//! - **Binders**: contract traits plus the glue subscribing views to the
//!   observables
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use bistro_core::prelude::*;
//!
//! let api = Rc::new(InMemoryRestaurantApi::seeded()?);
//! let store = Rc::new(RestaurantStore::new(api)?);
//! let aggregator = StatsAggregator::new(&store);
//! let flow = Rc::new(ReviewFlow::new(Rc::clone(&store)));
//!
//! flow.process("Très bon service", 4)?;
//! let stats = aggregator.stats().current().unwrap();
//! println!("{} avis, moyenne {}", stats.review_count, stats.average_rating);
//! ```

pub mod aggregator;
pub mod api;
pub mod binder;
pub mod error;
pub mod flow;
pub mod model;
pub mod profile;
pub mod store;

pub use error::{ApiError, ValidationError};
pub use model::{Restaurant, Review, ReviewStats};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::aggregator::StatsAggregator;
    pub use crate::api::{InMemoryRestaurantApi, RestaurantApi};
    pub use crate::binder::{
        DetailsBinder, DetailsView, ReviewListBinder, ReviewListView, SUBMIT_CONFIRMATION,
    };
    pub use crate::error::{ApiError, ValidationError};
    pub use crate::flow::ReviewFlow;
    pub use crate::model::{Restaurant, Review, ReviewStats};
    pub use crate::profile::CurrentUser;
    pub use crate::store::RestaurantStore;
}
