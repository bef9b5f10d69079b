//! Error types for Monte Carlo configuration.
//!
//! Configuration errors occur when a simulation grid is built; they convert
//! into `PricingError::InvalidParameter` at the public boundary.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_MATRIX_ENTRIES, MAX_PATHS, MAX_STEPS};

/// Configuration error for the Monte Carlo engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),
    /// Step count outside the valid range.
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),
    /// Worker count of zero.
    #[error("Invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),
    /// Full path matrix larger than [`MAX_MATRIX_ENTRIES`] values.
    #[error(
        "Path matrix of {n_paths} paths × {n_points} dates exceeds {max} values",
        max = MAX_MATRIX_ENTRIES
    )]
    MatrixTooLarge {
        /// Requested paths.
        n_paths: usize,
        /// Requested dates per path (`n_steps + 1`).
        n_points: usize,
    },
    /// A required builder field was not set.
    #[error("Missing parameter '{0}': must be specified")]
    Missing(&'static str),
}

impl ConfigError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ConfigError::InvalidPathCount(_) => "n_paths",
            ConfigError::InvalidStepCount(_) => "n_steps",
            ConfigError::InvalidWorkerCount(_) => "workers",
            ConfigError::MatrixTooLarge { .. } => "n_paths",
            ConfigError::Missing(name) => name,
        }
    }
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::invalid(err.parameter(), err.to_string())
    }
}
