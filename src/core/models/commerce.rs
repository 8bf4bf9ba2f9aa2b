//! Orders, payments, catalog and stock records

use serde::{Deserialize, Serialize};

/// A payment accepted by a gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID (e.g., "TX-1")
    pub id: String,
    /// Charged amount
    pub amount: f64,
    /// Last four digits of the card; the full number is never kept
    pub card_last4: String,
}

/// A paid order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Ordered items
    pub items: Vec<String>,
    /// Order total
    pub total: f64,
    /// Transaction that paid for this order
    pub transaction_id: String,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Price before tax and discount
    pub base_price: f64,
    /// Free-form category ("electronics", "media", ...)
    pub category: String,
}

impl Product {
    /// Create a catalog entry
    #[must_use]
    pub fn new(base_price: f64, category: impl Into<String>) -> Self {
        Self {
            base_price,
            category: category.into(),
        }
    }
}

/// Stock held for one inventory item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Unit price
    pub price: f64,
    /// Units on hand
    pub stock: u32,
}
