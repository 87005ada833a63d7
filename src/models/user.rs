//! User entities.

use serde::{Deserialize, Serialize};

use crate::api::UserId;

/// A registered user.
///
/// The identifier is assigned by the upstream identity provider; the display
/// name is refreshed on every login (upsert semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
}

impl User {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

/// The authenticated user making a request.
///
/// Resolved from the session token by the HTTP layer; always present as a
/// row in the availability matrix even with zero recorded entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub user_id: UserId,
    pub username: String,
}

impl Viewer {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

impl From<User> for Viewer {
    fn from(user: User) -> Self {
        Viewer {
            user_id: user.user_id,
            username: user.username,
        }
    }
}
