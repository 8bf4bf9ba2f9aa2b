//! In-memory notification outbox

use crate::core::ports::NotificationService;

/// Sent notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationService {
    notifications: Vec<String>,
}

impl InMemoryNotificationService {
    /// Create an empty outbox
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification sent so far
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl NotificationService for InMemoryNotificationService {
    fn notify(&mut self, message: &str) -> usize {
        self.notifications.push(message.to_string());
        self.notifications.len()
    }

    fn get_latest(&self) -> Option<String> {
        self.notifications.last().cloned()
    }
}
