//! User model for storage.

use serde::{Deserialize, Serialize};

/// User account stored in the `users` collection.
///
/// The password is kept as given. Hashing is not part of this service's
/// contract yet, so the stored value is plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier (Firestore document ID)
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Lookup key; uniqueness is checked by `AuthService`, not the store
    pub email: String,
    pub password: String,
    /// When the account was created (RFC3339, UTC)
    pub created_at: String,
}

impl User {
    /// Build a user record that has not been stored yet.
    pub fn new(name: &str, email: &str, password: &str, created_at: String) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at,
        }
    }
}
