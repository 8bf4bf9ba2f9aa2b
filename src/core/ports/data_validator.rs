//! Data validator port
//!
//! A validator keeps the messages produced by its most recent call, so a
//! caller can report why a value was rejected.

/// Validation rules for form fields
#[cfg_attr(test, mockall::automock)]
pub trait DataValidator {
    /// Check an email address, replacing the current messages
    fn validate_email(&mut self, email: &str) -> bool;

    /// Check a password, replacing the current messages
    fn validate_password(&mut self, password: &str) -> bool;

    /// Messages produced by the most recent validation
    fn error_messages(&self) -> Vec<String>;
}
