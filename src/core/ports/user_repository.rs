//! User repository port
//!
//! Defines the interface an authentication service uses to look up accounts.

use crate::core::models::User;

/// Lookup and bookkeeping for user accounts
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository {
    /// Find a user by name
    fn get_user(&self, username: &str) -> Option<User>;

    /// Record that `username` just logged in
    ///
    /// Returns `false` when the user does not exist.
    fn update_last_login(&mut self, username: &str) -> bool;
}
