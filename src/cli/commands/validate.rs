//! Sign-up form validation

use duet::adapters::RuleValidator;
use duet::core::services::FormHandler;
use duet::output::{OutputMode, Report};

/// Submit a form and print whether it was accepted
pub fn validate(email: &str, password: &str, mode: OutputMode) {
    let mut handler = FormHandler::new(RuleValidator::new());
    handler.submit_form(email, password).render(mode);
}
