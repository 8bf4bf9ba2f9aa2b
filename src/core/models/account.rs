//! User account model

use serde::{Deserialize, Serialize};

/// Access level of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access
    Admin,
    /// Regular account
    #[default]
    User,
}

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Plain-text password compared on login
    pub password: String,

    /// Access level
    pub role: Role,

    /// Date of the last successful login (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl User {
    /// Create a user that has never logged in
    #[must_use]
    pub fn new(password: impl Into<String>, role: Role) -> Self {
        Self {
            password: password.into(),
            role,
            last_login: None,
        }
    }
}
