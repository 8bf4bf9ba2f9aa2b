//! Rate-based price calculator

use crate::core::ports::{PriceCalculator, PriceOptions};
use crate::core::services::round_cents;

/// Applies a flat tax rate and a flat discount rate
///
/// Both rates apply to the base price, not to each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatePriceCalculator {
    tax_rate: f64,
    discount_rate: f64,
}

impl RatePriceCalculator {
    /// Standard tax rate
    pub const DEFAULT_TAX_RATE: f64 = 0.1;
    /// Standard discount rate
    pub const DEFAULT_DISCOUNT_RATE: f64 = 0.05;

    /// Create a calculator with custom rates
    #[must_use]
    pub const fn new(tax_rate: f64, discount_rate: f64) -> Self {
        Self {
            tax_rate,
            discount_rate,
        }
    }

    /// Tax rate in use
    #[must_use]
    pub const fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Discount rate in use
    #[must_use]
    pub const fn discount_rate(&self) -> f64 {
        self.discount_rate
    }
}

impl Default for RatePriceCalculator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TAX_RATE, Self::DEFAULT_DISCOUNT_RATE)
    }
}

impl PriceCalculator for RatePriceCalculator {
    fn calculate_final_price(&self, base_price: f64, options: PriceOptions) -> f64 {
        let mut price = base_price;
        if options.apply_tax {
            price += base_price * self.tax_rate;
        }
        if options.apply_discount {
            price -= base_price * self.discount_rate;
        }
        round_cents(price)
    }
}
