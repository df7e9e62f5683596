use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record.
///
/// Field names on the wire match the persisted attribute names exactly.
/// Missing fields deserialize to empty strings so that validation, not the
/// JSON parser, decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Opaque identifier, assigned by the server on creation.
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(rename = "DOB")]
    pub dob: String,
}

impl User {
    /// Creates a user with a freshly generated ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            user_id: generate_user_id(),
            name: name.into(),
            email: email.into(),
            dob: dob.into(),
        }
    }

    /// Sets a specific ID for this user.
    pub fn with_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Replaces whatever ID the caller sent with a server-generated one.
    pub fn with_generated_id(self) -> Self {
        self.with_id(generate_user_id())
    }
}

/// Generates a new opaque user ID (hyphenated UUID v4).
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}
