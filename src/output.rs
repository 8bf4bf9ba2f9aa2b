//! Output formatting for human and JSON modes
//!
//! Every CLI result can be rendered either as one human-readable line or
//! as pretty-printed JSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::models::FormOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result the CLI can print
pub trait Report: Serialize {
    /// Human-readable form
    fn human(&self) -> String;

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of a calculator operation
#[derive(Debug, Serialize)]
pub struct CalcResult {
    /// `add` or `subtract`
    pub operation: &'static str,
    /// Left operand
    pub a: f64,
    /// Right operand
    pub b: f64,
    /// The computed value
    pub result: f64,
    /// Log file the operation was recorded in
    pub log_file: PathBuf,
}

impl Report for CalcResult {
    fn human(&self) -> String {
        self.result.to_string()
    }
}

/// Result of a currency conversion
#[derive(Debug, Serialize)]
pub struct ConversionResult {
    /// Source currency
    pub from: String,
    /// Target currency
    pub to: String,
    /// Amount converted
    pub amount: f64,
    /// Converted amount, `None` if a currency is unknown
    pub result: Option<f64>,
}

impl Report for ConversionResult {
    fn human(&self) -> String {
        match self.result {
            Some(result) => format!("{} {} = {result:.2} {}", self.amount, self.from, self.to),
            None => format!("Cannot convert {} to {}: unknown currency", self.from, self.to),
        }
    }
}

/// Result of an export
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// File written
    pub path: PathBuf,
    /// Number of records exported
    pub records: usize,
}

impl Report for ExportResult {
    fn human(&self) -> String {
        format!("Exported {} record(s) to {}", self.records, self.path.display())
    }
}

/// Result of a price lookup
#[derive(Debug, Serialize)]
pub struct PriceResult {
    /// Product looked up
    pub product: String,
    /// Whether the discount was applied
    pub discount: bool,
    /// Final price, `None` if the product is unknown
    pub price: Option<f64>,
}

impl Report for PriceResult {
    fn human(&self) -> String {
        self.price.map_or_else(
            || format!("Product not found: {}", self.product),
            |price| format!("{}: {price:.2}", self.product),
        )
    }
}

/// Result of a search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Query text
    pub query: String,
    /// Matching document IDs, best first
    pub results: Vec<String>,
}

impl Report for SearchResult {
    fn human(&self) -> String {
        if self.results.is_empty() {
            format!("No documents match \"{}\"", self.query)
        } else {
            self.results.join("\n")
        }
    }
}

/// Result of rendering a page
#[derive(Debug, Serialize)]
pub struct RenderResult {
    /// Page name
    pub page: String,
    /// Rendered markup
    pub html: String,
}

impl Report for RenderResult {
    fn human(&self) -> String {
        self.html.clone()
    }
}

impl Report for FormOutcome {
    fn human(&self) -> String {
        if self.success {
            "Form accepted".to_string()
        } else {
            format!("Form rejected: {}", self.errors.join("; "))
        }
    }
}

/// Version information
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VersionInfo {
    /// Crate version
    pub version: &'static str,
}

impl Report for VersionInfo {
    fn human(&self) -> String {
        format!("duet v{}", self.version)
    }
}
