//! Inventory manager port

/// Stock and price lookups for a shop
#[cfg_attr(test, mockall::automock)]
pub trait InventoryManager {
    /// Whether at least `quantity` units of `item_id` are in stock
    ///
    /// Unknown items are never available.
    fn check_availability(&self, item_id: &str, quantity: u32) -> bool;

    /// Unit price of `item_id`, or `0.0` if the item is unknown
    fn get_price(&self, item_id: &str) -> f64;
}
