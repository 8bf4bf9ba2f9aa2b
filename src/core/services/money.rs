//! Rounding for monetary amounts

/// Round to two decimal places
///
/// Rounds the exact binary value, so `0.495` (stored just below the half)
/// goes down to `0.49`, and true ties such as `0.125` go to the even cent.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
