//! User slice of the store.

use farme_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// Profile of a signed-in shopper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
        }
    }
}

/// The current shopper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum User {
    /// Guest browsing without an account.
    #[default]
    Anonymous,
    /// Signed-in shopper.
    Authenticated(UserProfile),
}

impl User {
    /// Check if user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, User::Authenticated(_))
    }
}
