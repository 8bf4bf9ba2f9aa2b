//! Calculator backed by the file logger

use log::debug;

use crate::cli::app::CalcOp;
use duet::config::DuetConfig;
use duet::core::services::Calculator;
use duet::output::{CalcResult, OutputMode, Report};

/// Run one calculator operation and record it in the configured log file
pub fn calc(op: CalcOp, config: &DuetConfig, mode: OutputMode) -> anyhow::Result<()> {
    let mut calculator = Calculator::new(config.file_logger());
    debug!("Logging to {}", config.logger.file.display());

    let (operation, a, b, result) = match op {
        CalcOp::Add { a, b } => ("add", a, b, calculator.add(a, b)?),
        CalcOp::Sub { a, b } => ("subtract", a, b, calculator.subtract(a, b)?),
    };

    CalcResult {
        operation,
        a,
        b,
        result,
        log_file: calculator.logger().path().to_path_buf(),
    }
    .render(mode);
    Ok(())
}
