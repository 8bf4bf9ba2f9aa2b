//! Form handler
//!
//! Accepts a sign-up form once the [`DataValidator`] is happy with both
//! fields. The email is checked first; when it fails, the password is
//! never looked at.

use log::debug;

use crate::core::models::{FormOutcome, Submission};
use crate::core::ports::DataValidator;

/// Validates and stores form submissions
#[derive(Debug)]
pub struct FormHandler<V> {
    validator: V,
    submitted: Option<Submission>,
}

impl<V: DataValidator> FormHandler<V> {
    /// Create a handler with no accepted submission
    pub const fn new(validator: V) -> Self {
        Self {
            validator,
            submitted: None,
        }
    }

    /// Validate and, if valid, store a submission
    ///
    /// A rejected submission leaves any earlier accepted one in place.
    pub fn submit_form(&mut self, email: &str, password: &str) -> FormOutcome {
        if !self.validator.validate_email(email) {
            debug!("Rejected form: bad email");
            return FormOutcome::rejected(self.validator.error_messages());
        }

        if !self.validator.validate_password(password) {
            debug!("Rejected form: bad password");
            return FormOutcome::rejected(self.validator.error_messages());
        }

        self.submitted = Some(Submission {
            email: email.to_string(),
            password: password.to_string(),
        });
        FormOutcome::accepted()
    }

    /// The last accepted submission
    pub const fn submitted_data(&self) -> Option<&Submission> {
        self.submitted.as_ref()
    }

    /// The validator
    pub const fn validator(&self) -> &V {
        &self.validator
    }
}
