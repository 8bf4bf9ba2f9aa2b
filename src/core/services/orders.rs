//! Order processor
//!
//! An order exists only once its payment went through. Order IDs count
//! successful orders, so a refused payment does not burn an ID.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::core::models::Order;
use crate::core::ports::PaymentGateway;

/// Creates paid orders
#[derive(Debug)]
pub struct OrderProcessor<G> {
    gateway: G,
    orders: BTreeMap<String, Order>,
}

impl<G: PaymentGateway> OrderProcessor<G> {
    /// Create a processor with an empty order book
    pub const fn new(gateway: G) -> Self {
        Self {
            gateway,
            orders: BTreeMap::new(),
        }
    }

    /// Charge the card and record the order
    ///
    /// Returns the new order ID (`ORD-1`, `ORD-2`, ...) or `None` if the
    /// payment was refused.
    pub fn create_order(&mut self, items: Vec<String>, total: f64, card_number: &str) -> Option<String> {
        let Some(transaction_id) = self.gateway.process_payment(total, card_number) else {
            debug!("Payment refused for order of {total}");
            return None;
        };

        let order_id = format!("ORD-{}", self.orders.len() + 1);
        info!("Created {order_id} paid by {transaction_id}");
        self.orders.insert(
            order_id.clone(),
            Order {
                items,
                total,
                transaction_id,
            },
        );
        Some(order_id)
    }

    /// Look up an order
    #[must_use]
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// All orders keyed by ID
    pub const fn orders(&self) -> &BTreeMap<String, Order> {
        &self.orders
    }

    /// The payment gateway
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }
}
