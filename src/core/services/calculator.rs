//! Calculator with an audit log
//!
//! Every operation writes one line to the [`Logger`] before the result is
//! handed back. If the log write fails, the error is returned and the
//! result is discarded.

use std::fmt::Display;
use std::ops::{Add, Sub};

use crate::core::ports::Logger;

/// Arithmetic that logs each operation
#[derive(Debug)]
pub struct Calculator<L> {
    logger: L,
}

impl<L: Logger> Calculator<L> {
    /// Create a calculator writing to `logger`
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// `a + b`, logged as `Addition: a + b = result`
    pub fn add<T>(&mut self, a: T, b: T) -> crate::Result<T>
    where
        T: Add<Output = T> + Copy + Display,
    {
        let result = a + b;
        self.logger.log(&format!("Addition: {a} + {b} = {result}"))?;
        Ok(result)
    }

    /// `a - b`, logged as `Subtraction: a - b = result`
    pub fn subtract<T>(&mut self, a: T, b: T) -> crate::Result<T>
    where
        T: Sub<Output = T> + Copy + Display,
    {
        let result = a - b;
        self.logger.log(&format!("Subtraction: {a} - {b} = {result}"))?;
        Ok(result)
    }

    /// The audit logger
    pub const fn logger(&self) -> &L {
        &self.logger
    }
}
