//! Product catalog
//!
//! Prices always include tax; the discount is up to the caller.

use std::collections::HashMap;

use crate::core::models::Product;
use crate::core::ports::{PriceCalculator, PriceOptions};

/// Products priced through a [`PriceCalculator`]
#[derive(Debug)]
pub struct ProductCatalog<C> {
    products: HashMap<String, Product>,
    calculator: C,
}

impl<C: PriceCalculator> ProductCatalog<C> {
    /// Create an empty catalog
    pub fn new(calculator: C) -> Self {
        Self {
            products: HashMap::new(),
            calculator,
        }
    }

    /// Create a catalog holding a laptop and a book
    pub fn seeded(calculator: C) -> Self {
        let mut catalog = Self::new(calculator);
        catalog.add_product("laptop", Product::new(1000.0, "electronics"));
        catalog.add_product("book", Product::new(20.0, "media"));
        catalog
    }

    /// Add or replace a product
    pub fn add_product(&mut self, product_id: impl Into<String>, product: Product) {
        self.products.insert(product_id.into(), product);
    }

    /// Look up a product
    #[must_use]
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Final price of a product, tax included
    pub fn get_product_price(&self, product_id: &str, apply_discount: bool) -> Option<f64> {
        let product = self.products.get(product_id)?;
        Some(
            self.calculator
                .calculate_final_price(product.base_price, PriceOptions::taxed(apply_discount)),
        )
    }

    /// The price calculator
    pub const fn calculator(&self) -> &C {
        &self.calculator
    }
}
