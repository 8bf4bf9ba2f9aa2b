//! Rows handed to the exporter

use serde_json::{Map, Value};

/// One row of exported data
///
/// Field order is insertion order, so the first record's keys can serve
/// as the CSV header.
pub type Record = Map<String, Value>;

/// Render a single field the way it appears in exported text
///
/// Strings are written without quotes; everything else uses its JSON form.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
