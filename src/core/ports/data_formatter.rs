//! Data formatter port

use crate::core::models::Record;

/// Turns records into delimited text
#[cfg_attr(test, mockall::automock)]
pub trait DataFormatter {
    /// Format records as comma-separated lines, header first
    ///
    /// An empty slice formats to an empty string.
    fn format_to_csv(&self, data: &[Record]) -> String;
}
