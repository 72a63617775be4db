//! User record and the JSON shapes exchanged over HTTP.

use serde::{Deserialize, Serialize};

/// Identifier assigned by [`crate::store::UserStore`]. Never supplied by clients.
pub type UserId = i64;

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether the record carries a name. Any non-empty string counts.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User { name: req.name }
    }
}

/// Body returned by `POST /users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: UserId,
}
