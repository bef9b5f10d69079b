//! CLI error types.

use pricer_core::types::PricingError;
use pricer_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `mcq` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument or input record is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pricing, simulation or portfolio risk failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A risk statistic could not be computed.
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON input, or output serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
