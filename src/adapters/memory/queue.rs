//! In-memory FIFO queue

use std::collections::VecDeque;

use crate::core::ports::MessageQueue;

/// Messages waiting to be processed
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageQueue {
    messages: VecDeque<String>,
}

impl InMemoryMessageQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of waiting messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the queue is drained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageQueue for InMemoryMessageQueue {
    fn add_message(&mut self, message: &str) -> bool {
        self.messages.push_back(message.to_string());
        true
    }

    fn get_next_message(&mut self) -> Option<String> {
        self.messages.pop_front()
    }
}
