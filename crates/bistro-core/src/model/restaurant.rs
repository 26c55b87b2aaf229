//! Restaurant descriptor model.

use serde::{Deserialize, Serialize};

/// Descriptive record for the restaurant whose profile is displayed.
///
/// Seeded once from the data source and never mutated. The core only ever
/// reads `name`; the remaining fields pass through to the views untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restaurant {
    /// Display name.
    pub name: String,
    /// Cuisine type (e.g. "Indien").
    pub cuisine: String,
    /// Street address.
    pub address: String,
    /// Opening hours, preformatted for display.
    pub hours: String,
    /// Contact phone number.
    pub phone: String,
    /// Website URL.
    pub website: String,
    /// Whether dine-in service is offered.
    pub dine_in: bool,
    /// Whether take-away service is offered.
    pub take_away: bool,
}
