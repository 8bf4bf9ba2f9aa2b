//! Transaction logger port

/// Audit trail of currency conversions
#[cfg_attr(test, mockall::automock)]
pub trait TransactionLogger {
    /// Record one conversion
    ///
    /// Returns the number of conversions recorded so far, this one included.
    fn log_conversion(&mut self, from: &str, to: &str, amount: f64, result: f64) -> usize;
}
