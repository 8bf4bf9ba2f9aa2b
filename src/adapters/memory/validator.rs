//! Rule-based field validator

use crate::core::ports::DataValidator;

/// Message recorded for a rejected email
pub const EMAIL_ERROR: &str = "Invalid email format";

/// Message recorded for a rejected password
pub const PASSWORD_ERROR: &str = "Password must be at least 8 characters";

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimal email and password rules
///
/// An email needs an `@`; a password needs [`MIN_PASSWORD_LEN`] characters.
#[derive(Debug, Clone, Default)]
pub struct RuleValidator {
    error_messages: Vec<String>,
}

impl RuleValidator {
    /// Create a validator with no messages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, message: &str) -> bool {
        self.error_messages.push(message.to_string());
        false
    }
}

impl DataValidator for RuleValidator {
    fn validate_email(&mut self, email: &str) -> bool {
        self.error_messages.clear();
        if email.is_empty() || !email.contains('@') {
            return self.reject(EMAIL_ERROR);
        }
        true
    }

    fn validate_password(&mut self, password: &str) -> bool {
        self.error_messages.clear();
        if password.chars().count() < MIN_PASSWORD_LEN {
            return self.reject(PASSWORD_ERROR);
        }
        true
    }

    fn error_messages(&self) -> Vec<String> {
        self.error_messages.clone()
    }
}
