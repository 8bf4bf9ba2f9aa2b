//! Email service port

/// Outgoing mail
#[cfg_attr(test, mockall::automock)]
pub trait EmailService {
    /// Send the welcome message to `email`
    fn send_welcome(&mut self, email: &str) -> bool;

    /// Number of emails sent so far
    fn get_sent_count(&self) -> usize;
}
