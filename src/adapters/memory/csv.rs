//! Comma-separated formatter
//!
//! The header comes from the first record's keys. Each row then lists its
//! own record's values in that record's key order, so records with a
//! different shape are not realigned to the header. Nothing is quoted or
//! escaped.

use crate::core::models::{Record, render_value};
use crate::core::ports::DataFormatter;

/// Plain comma-joined text
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a formatter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataFormatter for CsvFormatter {
    fn format_to_csv(&self, data: &[Record]) -> String {
        let Some(first) = data.first() else {
            return String::new();
        };

        let header = first.keys().map(String::as_str).collect::<Vec<_>>().join(",");
        let rows = data
            .iter()
            .map(|record| record.values().map(render_value).collect::<Vec<_>>().join(","));

        std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
    }
}
