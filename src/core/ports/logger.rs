//! Logger port

/// Sink for calculator audit lines
#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    /// Write one timestamped entry
    ///
    /// Returns the full entry as written, timestamp included.
    fn log(&mut self, message: &str) -> crate::Result<String>;
}
