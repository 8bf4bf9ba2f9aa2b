//! Filesystem-backed collaborators

mod logger;

pub use logger::{DEFAULT_LOG_FILE, FileLogger, TIMESTAMP_FORMAT, format_entry};
