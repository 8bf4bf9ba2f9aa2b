//! In-memory user repository

use std::collections::HashMap;

use crate::core::models::{Role, User};
use crate::core::ports::UserRepository;

/// User accounts held in a map keyed by username
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `alice` (admin) and `bob` (user)
    #[must_use]
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        repo.insert("alice", User::new("pass123", Role::Admin));
        repo.insert("bob", User::new("pass456", Role::User));
        repo
    }

    /// Add or replace a user
    pub fn insert(&mut self, username: impl Into<String>, user: User) {
        self.users.insert(username.into(), user);
    }

    /// Borrow a stored user
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Number of stored users
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the repository is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_user(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    fn update_last_login(&mut self, username: &str) -> bool {
        let Some(user) = self.users.get_mut(username) else {
            return false;
        };
        user.last_login = Some(chrono::Local::now().format("%Y-%m-%d").to_string());
        true
    }
}
