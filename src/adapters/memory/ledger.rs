//! In-memory transaction logger

use crate::core::models::ConversionRecord;
use crate::core::ports::TransactionLogger;

/// Conversion records kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionLogger {
    logs: Vec<ConversionRecord>,
}

impl InMemoryTransactionLogger {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded conversions, oldest first
    #[must_use]
    pub fn logs(&self) -> &[ConversionRecord] {
        &self.logs
    }
}

impl TransactionLogger for InMemoryTransactionLogger {
    fn log_conversion(&mut self, from: &str, to: &str, amount: f64, result: f64) -> usize {
        self.logs.push(ConversionRecord {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            result,
        });
        self.logs.len()
    }
}
