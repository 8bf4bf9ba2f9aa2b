//! Currency converter
//!
//! Converts between currencies quoted against a common base and reports
//! every successful conversion to a [`TransactionLogger`].

use std::collections::HashMap;

use log::debug;

use super::money::round_cents;
use crate::core::ports::TransactionLogger;

/// Built-in exchange rates, quoted against USD
#[must_use]
pub fn default_rates() -> HashMap<String, f64> {
    [("USD", 1.0), ("EUR", 0.85), ("GBP", 0.73)]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect()
}

/// Converts amounts and logs each conversion
#[derive(Debug)]
pub struct CurrencyConverter<L> {
    rates: HashMap<String, f64>,
    logger: L,
}

impl<L: TransactionLogger> CurrencyConverter<L> {
    /// Create a converter using [`default_rates`]
    pub fn new(logger: L) -> Self {
        Self::with_rates(logger, default_rates())
    }

    /// Create a converter with custom rates
    pub const fn with_rates(logger: L, rates: HashMap<String, f64>) -> Self {
        Self { rates, logger }
    }

    /// Convert `amount` from one currency to another
    ///
    /// Codes are case-sensitive. Unknown codes return `None` and nothing is
    /// logged. The logger receives the unrounded result; the caller gets it
    /// rounded to cents.
    pub fn convert(&mut self, from: &str, to: &str, amount: f64) -> Option<f64> {
        let (Some(&from_rate), Some(&to_rate)) = (self.rates.get(from), self.rates.get(to)) else {
            debug!("No rate for {from} -> {to}");
            return None;
        };

        let result = amount * (to_rate / from_rate);
        self.logger.log_conversion(from, to, amount, result);
        Some(round_cents(result))
    }

    /// Exchange rate table
    pub const fn rates(&self) -> &HashMap<String, f64> {
        &self.rates
    }

    /// The transaction logger
    pub const fn logger(&self) -> &L {
        &self.logger
    }
}
