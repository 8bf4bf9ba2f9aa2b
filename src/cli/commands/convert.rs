//! Currency conversion with the configured rates

use duet::adapters::InMemoryTransactionLogger;
use duet::config::DuetConfig;
use duet::core::services::CurrencyConverter;
use duet::output::{ConversionResult, OutputMode, Report};

/// Convert `amount` from one currency to another
pub fn convert(from: &str, to: &str, amount: f64, config: &DuetConfig, mode: OutputMode) {
    let mut converter = CurrencyConverter::with_rates(InMemoryTransactionLogger::new(), config.rates());
    let result = converter.convert(from, to, amount);

    ConversionResult {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        result,
    }
    .render(mode);
}
