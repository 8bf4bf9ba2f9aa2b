//! Payment gateway port

/// Charges cards
#[cfg_attr(test, mockall::automock)]
pub trait PaymentGateway {
    /// Charge `amount` to `card_number`
    ///
    /// Returns the transaction ID, or `None` if the payment was refused.
    fn process_payment(&mut self, amount: f64, card_number: &str) -> Option<String>;
}
