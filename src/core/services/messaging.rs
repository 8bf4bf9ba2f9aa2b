//! Message processor
//!
//! Pulls messages off a [`MessageQueue`] and keeps an upper-cased copy of
//! each. An empty message is consumed but counts as "nothing processed",
//! so it also stops [`MessageProcessor::process_all`].

use crate::core::ports::MessageQueue;

/// Drains a message queue
#[derive(Debug)]
pub struct MessageProcessor<Q> {
    queue: Q,
    processed: Vec<String>,
}

impl<Q: MessageQueue> MessageProcessor<Q> {
    /// Create a processor over `queue`
    pub const fn new(queue: Q) -> Self {
        Self {
            queue,
            processed: Vec::new(),
        }
    }

    /// Process the next message, if there is a non-empty one
    pub fn process_next(&mut self) -> bool {
        match self.queue.get_next_message() {
            Some(message) if !message.is_empty() => {
                self.processed.push(message.to_uppercase());
                true
            },
            _ => false,
        }
    }

    /// Process messages until [`Self::process_next`] returns `false`
    ///
    /// Returns how many messages were processed.
    pub fn process_all(&mut self) -> usize {
        let mut count = 0;
        while self.process_next() {
            count += 1;
        }
        count
    }

    /// Processed messages, oldest first
    #[must_use]
    pub fn processed_messages(&self) -> &[String] {
        &self.processed
    }

    /// The queue
    pub const fn queue(&self) -> &Q {
        &self.queue
    }

    /// Mutable access to the queue, for enqueuing more work
    pub const fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }
}
