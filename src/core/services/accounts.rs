//! User manager
//!
//! New accounts get exactly one welcome email; duplicates get none.

use std::collections::HashMap;

use log::info;

use crate::core::ports::EmailService;

/// Creates accounts and welcomes their owners
#[derive(Debug)]
pub struct UserManager<E> {
    email_service: E,
    users: HashMap<String, String>,
}

impl<E: EmailService> UserManager<E> {
    /// Create a manager with no accounts
    pub fn new(email_service: E) -> Self {
        Self {
            email_service,
            users: HashMap::new(),
        }
    }

    /// Create an account and send the welcome email
    ///
    /// Returns `false` if `user_id` already exists.
    pub fn create_user(&mut self, user_id: &str, email: &str) -> bool {
        if self.users.contains_key(user_id) {
            return false;
        }
        self.users.insert(user_id.to_string(), email.to_string());
        self.email_service.send_welcome(email);
        info!("Created user {user_id}");
        true
    }

    /// Email address on file for a user
    #[must_use]
    pub fn email_of(&self, user_id: &str) -> Option<&str> {
        self.users.get(user_id).map(String::as_str)
    }

    /// The email service
    pub const fn email_service(&self) -> &E {
        &self.email_service
    }
}
