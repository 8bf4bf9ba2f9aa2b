//! Data exporter
//!
//! Formats records through a [`DataFormatter`] and writes the text to a
//! file, replacing whatever was there.

use std::fs;
use std::path::Path;

use log::info;

use crate::Error;
use crate::core::models::Record;
use crate::core::ports::DataFormatter;

/// Writes formatted records to disk
#[derive(Debug)]
pub struct DataExporter<F> {
    formatter: F,
}

impl<F: DataFormatter> DataExporter<F> {
    /// Create an exporter using `formatter`
    pub const fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Format `data` and write it to `path`
    ///
    /// Returns the number of records exported. Empty input still creates
    /// (or truncates) the file.
    pub fn export_to_file(&self, data: &[Record], path: impl AsRef<Path>) -> crate::Result<usize> {
        let path = path.as_ref();
        let formatted = self.formatter.format_to_csv(data);
        fs::write(path, formatted).map_err(|e| Error::io(path, e))?;
        info!("Exported {} record(s) to {}", data.len(), path.display());
        Ok(data.len())
    }

    /// The formatter
    pub const fn formatter(&self) -> &F {
        &self.formatter
    }
}
