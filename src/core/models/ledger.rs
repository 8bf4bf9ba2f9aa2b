//! Currency conversion log entry

use serde::{Deserialize, Serialize};

/// One conversion as seen by the transaction logger
///
/// `result` is the unrounded converted amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Source currency code
    pub from: String,
    /// Target currency code
    pub to: String,
    /// Amount in the source currency
    pub amount: f64,
    /// Amount in the target currency
    pub result: f64,
}
