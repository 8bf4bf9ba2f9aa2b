//! Notification service port

/// Outbox for user-facing notifications
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService {
    /// Send a notification
    ///
    /// Returns the number of notifications sent so far, this one included.
    fn notify(&mut self, message: &str) -> usize;

    /// Most recently sent notification
    fn get_latest(&self) -> Option<String>;
}
