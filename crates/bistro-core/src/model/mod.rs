//! Domain value types.

pub mod restaurant;
pub mod review;
pub mod stats;

pub use restaurant::Restaurant;
pub use review::Review;
pub use stats::ReviewStats;
