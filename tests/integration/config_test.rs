//! CLI tests driven by `duet.toml`

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::duet;

#[test]
fn test_configured_log_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duet.toml"), "[logger]\nfile = \"calc.log\"\n").unwrap();

    duet(&dir).args(["calc", "add", "1", "2"]).assert().success();

    assert!(dir.path().join("calc.log").exists());
    assert!(!dir.path().join("app.log").exists());
}

#[test]
fn test_configured_rates() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("duet.toml"),
        "[currency.rates]\nUSD = 1.0\nJPY = 150.0\n",
    )
    .unwrap();

    duet(&dir)
        .args(["convert", "USD", "JPY", "2"])
        .assert()
        .success()
        .stdout("2 USD = 300.00 JPY\n");
}

#[test]
fn test_config_flag_overrides_default_location() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pricing.toml"), "[pricing]\ntax_rate = 0.0\n").unwrap();

    duet(&dir)
        .args(["--config", "pricing.toml", "price", "book"])
        .assert()
        .success()
        .stdout("book: 20.00\n");
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duet.toml"), "[pricing\n").unwrap();

    duet(&dir)
        .arg("version")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("duet.toml"));
}

#[test]
fn test_invalid_setting_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duet.toml"), "[pricing]\ntax_rate = 2.0\n").unwrap();

    duet(&dir)
        .args(["price", "book"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tax_rate"));
}
