//! User account models.

use serde::{Deserialize, Serialize};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Stored credential; never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// DTO for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Credential to store.
    pub password: String,
}

impl NewUser {
    /// Materializes the user with an id.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
