//! Identity of the end-user submitting reviews.

/// The user whose name and avatar are attached to submitted reviews.
///
/// There is no account system; the default identity is the fixed current
/// user of the session. An embedding with real accounts swaps the value at
/// flow construction without changing the submission control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Display name.
    pub username: String,
    /// Avatar URL.
    pub picture: String,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            username: "Manon Garcia".into(),
            picture: "https://xsgames.co/randomusers/assets/avatars/female/20.jpg".into(),
        }
    }
}
