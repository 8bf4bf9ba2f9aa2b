//! Authentication service
//!
//! Checks credentials against a [`UserRepository`] and keeps track of who
//! has logged in during this session.

use log::{debug, info};

use crate::core::ports::UserRepository;

/// Logs users in against a repository
#[derive(Debug)]
pub struct AuthService<R> {
    repository: R,
    logged_in_users: Vec<String>,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a service with nobody logged in
    pub const fn new(repository: R) -> Self {
        Self {
            repository,
            logged_in_users: Vec::new(),
        }
    }

    /// Attempt a login
    ///
    /// Succeeds only when the user exists and the password matches exactly.
    /// A successful login is appended to the session list (repeat logins
    /// appear repeatedly) and the repository's last-login date is updated.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let authenticated = self
            .repository
            .get_user(username)
            .is_some_and(|user| user.password == password);

        if !authenticated {
            debug!("Rejected login for {username}");
            return false;
        }

        self.logged_in_users.push(username.to_string());
        self.repository.update_last_login(username);
        info!("{username} logged in");
        true
    }

    /// Users logged in so far, in login order
    #[must_use]
    pub fn logged_in_users(&self) -> &[String] {
        &self.logged_in_users
    }

    /// Whether `username` has logged in at least once
    #[must_use]
    pub fn is_logged_in(&self, username: &str) -> bool {
        self.logged_in_users.iter().any(|u| u == username)
    }

    /// The backing repository
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutable access to the backing repository
    pub const fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
