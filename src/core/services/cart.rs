//! Shopping cart
//!
//! Availability is checked against stock on every add, but only for the
//! quantity being added: the cart does not reserve stock, so repeated adds
//! can exceed what the inventory holds.
//!
//! Lines keep the order items were first added, and the total is summed in
//! that order so the same cart always yields the same float.

use log::debug;

use crate::core::ports::InventoryManager;

/// A cart backed by an [`InventoryManager`]
#[derive(Debug)]
pub struct ShoppingCart<I> {
    inventory: I,
    items: Vec<(String, u32)>,
}

impl<I: InventoryManager> ShoppingCart<I> {
    /// Create an empty cart
    pub fn new(inventory: I) -> Self {
        Self {
            inventory,
            items: Vec::new(),
        }
    }

    /// Add `quantity` units of `item_id`
    pub fn add_item(&mut self, item_id: &str, quantity: u32) -> bool {
        if !self.inventory.check_availability(item_id, quantity) {
            debug!("{item_id} x{quantity} not available");
            return false;
        }

        match self.items.iter_mut().find(|(id, _)| id == item_id) {
            Some((_, held)) => *held += quantity,
            None => self.items.push((item_id.to_string(), quantity)),
        }
        true
    }

    /// Add a single unit of `item_id`
    pub fn add_one(&mut self, item_id: &str) -> bool {
        self.add_item(item_id, 1)
    }

    /// Cart total at current inventory prices
    pub fn get_total(&self) -> f64 {
        self.items
            .iter()
            .map(|(item_id, quantity)| self.inventory.get_price(item_id) * f64::from(*quantity))
            .sum()
    }

    /// Units of `item_id` in the cart
    #[must_use]
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.items
            .iter()
            .find(|(id, _)| id == item_id)
            .map_or(0, |(_, quantity)| *quantity)
    }

    /// Item IDs and quantities in the order they were first added
    #[must_use]
    pub fn items(&self) -> &[(String, u32)] {
        &self.items
    }

    /// Whether nothing has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The inventory
    pub const fn inventory(&self) -> &I {
        &self.inventory
    }

    /// Mutable access to the inventory
    pub const fn inventory_mut(&mut self) -> &mut I {
        &mut self.inventory
    }
}
