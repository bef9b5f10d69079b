//! Risk error types.
//!
//! This module provides structured error types for risk statistics and
//! portfolio simulation using `thiserror` for derivation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur while computing risk statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// The return or equity series is empty.
    #[error("Series is empty")]
    EmptySeries,

    /// A series entry is NaN or infinite.
    #[error("Series contains a non-finite value at index {0}")]
    NonFiniteValue(usize),

    /// The excess returns have zero dispersion, so the Sharpe ratio is undefined.
    #[error("Excess returns have zero variance")]
    ZeroVariance,

    /// Confidence level outside the open interval (0, 1).
    #[error("Confidence must lie in (0, 1), got {0}")]
    InvalidConfidence(f64),

    /// An equity value is not strictly positive, so drawdowns are undefined.
    #[error("Equity curve must be strictly positive, got {value} at index {index}")]
    NonPositiveEquity {
        /// Position in the curve.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Portfolio definition cannot be simulated.
    #[error("Invalid portfolio: {0}")]
    InvalidPortfolio(String),
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::EmptySeries | RiskError::ZeroVariance | RiskError::NonPositiveEquity { .. } => {
                PricingError::UndefinedStatistic(err.to_string())
            }
            RiskError::NonFiniteValue(_) => PricingError::invalid("returns", err.to_string()),
            RiskError::InvalidConfidence(_) => {
                PricingError::invalid("confidence", err.to_string())
            }
            RiskError::InvalidPortfolio(reason) => PricingError::invalid("portfolio", reason),
        }
    }
}
