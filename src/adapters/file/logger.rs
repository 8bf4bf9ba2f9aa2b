//! Append-only file logger
//!
//! Implements `Logger` by appending one `<timestamp>: <message>` line per
//! call. The file is created on first write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::core::ports::Logger;

/// Timestamp layout at the start of every log entry
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Prefix `message` with the current local time
#[must_use]
pub fn format_entry(message: &str) -> String {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    format!("{timestamp}: {message}")
}

/// Logger appending to a text file
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Log to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl Logger for FileLogger {
    fn log(&mut self, message: &str) -> crate::Result<String> {
        let entry = format_entry(message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        writeln!(file, "{entry}").map_err(|e| Error::io(&self.path, e))?;
        Ok(entry)
    }
}
