//! Price calculator port

/// Which adjustments to apply to a base price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceOptions {
    /// Add sales tax
    pub apply_tax: bool,
    /// Subtract the standard discount
    pub apply_discount: bool,
}

impl Default for PriceOptions {
    fn default() -> Self {
        Self {
            apply_tax: true,
            apply_discount: false,
        }
    }
}

impl PriceOptions {
    /// Tax applied, discount as given
    #[must_use]
    pub const fn taxed(apply_discount: bool) -> Self {
        Self {
            apply_tax: true,
            apply_discount,
        }
    }
}

/// Computes final prices
#[cfg_attr(test, mockall::automock)]
pub trait PriceCalculator {
    /// Final price for `base_price`, rounded to cents
    fn calculate_final_price(&self, base_price: f64, options: PriceOptions) -> f64;
}
