//! Export JSON records as CSV

use std::fs;
use std::path::Path;

use duet::adapters::CsvFormatter;
use duet::core::models::Record;
use duet::core::services::DataExporter;
use duet::output::{ExportResult, OutputMode, Report};

/// Read a JSON array of objects from `input` and write it to `output` as CSV
pub fn export(input: &Path, output: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let raw = fs::read_to_string(input).map_err(|e| duet::Error::io(input, e))?;
    let records: Vec<Record> = serde_json::from_str(&raw).map_err(duet::Error::from)?;

    let exporter = DataExporter::new(CsvFormatter::new());
    let records = exporter.export_to_file(&records, output)?;

    ExportResult {
        path: output.to_path_buf(),
        records,
    }
    .render(mode);
    Ok(())
}
