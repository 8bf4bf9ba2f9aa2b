//! Configuration management
//!
//! Settings are read from `duet.toml` in the working directory, or from
//! an explicit path. A missing file means defaults; a malformed file is an
//! error rather than being silently ignored.
//!
//! ```toml
//! [logger]
//! file = "calc.log"
//!
//! [currency.rates]
//! USD = 1.0
//! EUR = 0.85
//!
//! [pricing]
//! tax_rate = 0.2
//! discount_rate = 0.1
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapters::{DEFAULT_LOG_FILE, FileLogger, RatePriceCalculator};
use crate::core::services::default_rates;
use crate::{Error, Result};

/// Default configuration filename
pub const CONFIG_FILE: &str = "duet.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuetConfig {
    /// Calculator audit log
    #[serde(default)]
    pub logger: LoggerConfig,
    /// Currency converter rates
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Product pricing
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Calculator log settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// File the calculator appends to
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

/// Exchange rate settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Rate per currency code, relative to a common base
    #[serde(default = "default_rate_table")]
    pub rates: BTreeMap<String, f64>,
}

fn default_rate_table() -> BTreeMap<String, f64> {
    default_rates().into_iter().collect()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            rates: default_rate_table(),
        }
    }
}

/// Price calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate added to base prices
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// Discount rate subtracted from base prices
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

const fn default_tax_rate() -> f64 {
    RatePriceCalculator::DEFAULT_TAX_RATE
}

const fn default_discount_rate() -> f64 {
    RatePriceCalculator::DEFAULT_DISCOUNT_RATE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            discount_rate: default_discount_rate(),
        }
    }
}

impl DuetConfig {
    /// Parse configuration text and validate it
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content, path)
    }

    /// Write configuration to `path`
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that would make the pairs misbehave
    pub fn validate(&self) -> Result<()> {
        if let Some((code, rate)) = self.currency.rates.iter().find(|(_, rate)| !rate.is_finite() || **rate <= 0.0) {
            return Err(Error::InvalidSetting(format!(
                "rate for {code} must be positive, got {rate}"
            )));
        }
        for (name, value) in [
            ("tax_rate", self.pricing.tax_rate),
            ("discount_rate", self.pricing.discount_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidSetting(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Exchange rates for a currency converter
    #[must_use]
    pub fn rates(&self) -> HashMap<String, f64> {
        self.currency
            .rates
            .iter()
            .map(|(code, rate)| (code.clone(), *rate))
            .collect()
    }

    /// Price calculator using the configured rates
    #[must_use]
    pub const fn price_calculator(&self) -> RatePriceCalculator {
        RatePriceCalculator::new(self.pricing.tax_rate, self.pricing.discount_rate)
    }

    /// File logger writing to the configured file
    #[must_use]
    pub fn file_logger(&self) -> FileLogger {
        FileLogger::new(&self.logger.file)
    }
}
