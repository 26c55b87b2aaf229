//! Customer review model.

use serde::{Deserialize, Serialize};

/// One customer's feedback on the restaurant.
///
/// Equality and hashing are structural over all four fields. The fields are
/// public and an owned value can be edited, but reviews that went through
/// the submission flow are never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Review {
    /// Name of the reviewer.
    pub username: String,
    /// Avatar URL of the reviewer; treated as opaque text.
    pub picture: String,
    /// The feedback text.
    pub comment: String,
    /// Star rating. The UI only produces values in `1..=5`; the type admits
    /// anything, and the stats computation tolerates out-of-range values.
    pub rate: u8,
}

impl Review {
    /// Create a new review.
    pub fn new(
        username: impl Into<String>,
        picture: impl Into<String>,
        comment: impl Into<String>,
        rate: u8,
    ) -> Self {
        Self {
            username: username.into(),
            picture: picture.into(),
            comment: comment.into(),
            rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_structural() {
        let a = Review::new("Ana", "https://example.com/a.jpg", "Parfait", 5);
        let b = Review::new("Ana", "https://example.com/a.jpg", "Parfait", 5);
        assert_eq!(a, b);

        let c = Review::new("Ana", "https://example.com/a.jpg", "Parfait", 4);
        assert_ne!(a, c);
    }

    #[test]
    fn hashing_follows_equality() {
        let mut set = HashSet::new();
        set.insert(Review::new("Ana", "p", "Parfait", 5));
        assert!(set.contains(&Review::new("Ana", "p", "Parfait", 5)));
        assert!(!set.contains(&Review::new("Ana", "p", "Bien", 5)));
    }
}
