//! In-memory email outbox

use crate::core::models::SentEmail;
use crate::core::ports::EmailService;

/// Body of every welcome email
pub const WELCOME_MESSAGE: &str = "Welcome to our service!";

/// Records emails instead of sending them
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailService {
    sent: Vec<SentEmail>,
}

impl InMemoryEmailService {
    /// Create an empty outbox
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sent emails, oldest first
    #[must_use]
    pub fn sent_emails(&self) -> &[SentEmail] {
        &self.sent
    }
}

impl EmailService for InMemoryEmailService {
    fn send_welcome(&mut self, email: &str) -> bool {
        self.sent.push(SentEmail {
            to: email.to_string(),
            message: WELCOME_MESSAGE.to_string(),
        });
        true
    }

    fn get_sent_count(&self) -> usize {
        self.sent.len()
    }
}
