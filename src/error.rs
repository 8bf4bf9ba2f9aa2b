//! Crate-wide error type
//!
//! Domain misses (unknown user, unknown currency, empty queue) are not
//! errors; they come back as `None` or `false`. Only I/O, decoding, config
//! and template failures surface here, and they are passed through unchanged.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::services::TemplateError;

/// Errors raised by adapters and services
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input was not valid JSON of the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Configuration parsed but holds an unusable value
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// A template referenced something the content cannot provide
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
