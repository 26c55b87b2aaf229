//! Error types for the review domain.

use thiserror::Error;

/// Failures raised by the restaurant data source.
///
/// These propagate unchanged to the caller that triggered the access; the
/// embedding layer decides the user-facing message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The data source could not serve the request.
    #[error("restaurant source unavailable: {0}")]
    Unavailable(String),

    /// The embedded seed fixture could not be parsed.
    #[error("malformed seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Review-form validation outcomes.
///
/// The `Display` text is the exact message shown to the user, so it is part
/// of the public surface and must not be reworded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The comment was empty after trimming.
    #[error("Désolés, le commentaire ne peut pas être vide")]
    EmptyComment,

    /// No star rating was selected.
    #[error("Merci de donner une note")]
    MissingRating,
}
