//! In-memory payment gateway
//!
//! Accepts any card number made of exactly 16 ASCII digits. Transaction IDs
//! count accepted payments only.

use log::debug;

use crate::core::models::Transaction;
use crate::core::ports::PaymentGateway;

const CARD_DIGITS: usize = 16;

/// Gateway recording accepted payments
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentGateway {
    transactions: Vec<Transaction>,
}

impl InMemoryPaymentGateway {
    /// Create a gateway with no transactions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted payments, oldest first
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

fn is_valid_card(card_number: &str) -> bool {
    card_number.len() == CARD_DIGITS && card_number.bytes().all(|b| b.is_ascii_digit())
}

impl PaymentGateway for InMemoryPaymentGateway {
    fn process_payment(&mut self, amount: f64, card_number: &str) -> Option<String> {
        if !is_valid_card(card_number) {
            debug!("Refused card of length {}", card_number.len());
            return None;
        }

        let id = format!("TX-{}", self.transactions.len() + 1);
        self.transactions.push(Transaction {
            id: id.clone(),
            amount,
            card_last4: card_number[CARD_DIGITS - 4..].to_string(),
        });
        Some(id)
    }
}
