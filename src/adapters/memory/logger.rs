//! In-memory logger

use crate::adapters::file::format_entry;
use crate::core::ports::Logger;

/// Logger that keeps entries in memory instead of a file
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    entries: Vec<String>,
}

impl MemoryLogger {
    /// Create an empty logger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries written so far, oldest first
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Logger for MemoryLogger {
    fn log(&mut self, message: &str) -> crate::Result<String> {
        let entry = format_entry(message);
        self.entries.push(entry.clone());
        Ok(entry)
    }
}
