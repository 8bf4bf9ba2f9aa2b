//! Catalog price lookup

use duet::config::DuetConfig;
use duet::core::services::ProductCatalog;
use duet::output::{OutputMode, PriceResult, Report};

/// Print the final price of a product from the sample catalog
pub fn price(product: &str, discount: bool, config: &DuetConfig, mode: OutputMode) {
    let catalog = ProductCatalog::seeded(config.price_calculator());

    PriceResult {
        product: product.to_string(),
        discount,
        price: catalog.get_product_price(product, discount),
    }
    .render(mode);
}
