//! In-memory inventory

use std::collections::HashMap;

use crate::core::models::StockItem;
use crate::core::ports::InventoryManager;

/// Stock levels and prices keyed by item ID
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    items: HashMap<String, StockItem>,
}

impl InMemoryInventory {
    /// Create an empty inventory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing its price and stock if it already exists
    pub fn add_product(&mut self, item_id: impl Into<String>, price: f64, stock: u32) {
        self.items.insert(item_id.into(), StockItem { price, stock });
    }

    /// Current stock record of an item
    #[must_use]
    pub fn stock_item(&self, item_id: &str) -> Option<StockItem> {
        self.items.get(item_id).copied()
    }
}

impl InventoryManager for InMemoryInventory {
    fn check_availability(&self, item_id: &str, quantity: u32) -> bool {
        self.items.get(item_id).is_some_and(|item| item.stock >= quantity)
    }

    fn get_price(&self, item_id: &str) -> f64 {
        self.items.get(item_id).map_or(0.0, |item| item.price)
    }
}
