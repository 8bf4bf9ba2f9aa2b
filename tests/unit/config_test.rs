//! Tests for configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use duet::Error;
use duet::config::{CONFIG_FILE, DuetConfig};
use duet::core::ports::{PriceCalculator, PriceOptions};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = DuetConfig::default();

    assert_eq!(config.logger.file, PathBuf::from("app.log"));
    assert_eq!(config.currency.rates.len(), 3);
    assert_eq!(config.currency.rates["EUR"], 0.85);
    assert_eq!(config.pricing.tax_rate, 0.1);
    assert_eq!(config.pricing.discount_rate, 0.05);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = DuetConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(config, DuetConfig::default());
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = DuetConfig::from_toml_str(
        "[pricing]\ntax_rate = 0.2\n",
        Path::new(CONFIG_FILE),
    )
    .unwrap();

    assert_eq!(config.pricing.tax_rate, 0.2);
    assert_eq!(config.pricing.discount_rate, 0.05);
    assert_eq!(config.logger.file, PathBuf::from("app.log"));
}

#[test]
fn test_rates_section_replaces_the_table() {
    let config = DuetConfig::from_toml_str(
        "[currency.rates]\nUSD = 1.0\nJPY = 150.0\n",
        Path::new(CONFIG_FILE),
    )
    .unwrap();

    let rates = config.rates();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates["JPY"], 150.0);
    assert!(!rates.contains_key("EUR"));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[logger]\nfile = \"calc.log\"\n").unwrap();

    let config = DuetConfig::load(&path).unwrap();
    assert_eq!(config.logger.file, PathBuf::from("calc.log"));
    assert_eq!(config.file_logger().path(), Path::new("calc.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[pricing\ntax_rate = ").unwrap();

    let err = DuetConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config { path: ref p, .. } if *p == path));
}

#[test]
fn test_wrong_type_is_an_error() {
    let err = DuetConfig::from_toml_str("[pricing]\ntax_rate = \"high\"\n", Path::new(CONFIG_FILE))
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_zero_rate_is_rejected() {
    let err = DuetConfig::from_toml_str("[currency.rates]\nUSD = 0.0\n", Path::new(CONFIG_FILE))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSetting(ref msg) if msg.contains("USD")));
}

#[test]
fn test_out_of_range_discount_is_rejected() {
    let err = DuetConfig::from_toml_str("[pricing]\ndiscount_rate = 1.5\n", Path::new(CONFIG_FILE))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSetting(ref msg) if msg.contains("discount_rate")));
}

// =============================================================================
// SAVE / DERIVED ADAPTERS
// =============================================================================

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);

    let mut config = DuetConfig::default();
    config.pricing.discount_rate = 0.25;
    config.currency.rates.insert("CHF".to_string(), 0.9);
    config.save(&path).unwrap();

    assert_eq!(DuetConfig::load(&path).unwrap(), config);
}

#[test]
fn test_price_calculator_uses_configured_rates() {
    let mut config = DuetConfig::default();
    config.pricing.tax_rate = 0.5;

    let calculator = config.price_calculator();
    assert_eq!(calculator.calculate_final_price(10.0, PriceOptions::default()), 15.0);
}
