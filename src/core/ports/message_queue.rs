//! Message queue port

/// First-in first-out message buffer
#[cfg_attr(test, mockall::automock)]
pub trait MessageQueue {
    /// Append a message to the back of the queue
    fn add_message(&mut self, message: &str) -> bool;

    /// Take the message at the front of the queue
    fn get_next_message(&mut self) -> Option<String>;
}
