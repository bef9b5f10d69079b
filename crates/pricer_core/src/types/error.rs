//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by pricing, simulation and risk operations
//!
//! Numerical degeneracies inside the regression step are absorbed by the
//! algorithms themselves and never reach this type.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: A parameter violated its constraint; raised before any simulation
/// - `WorkerFailure`: A parallel worker failed; the whole request is aborted
/// - `UndefinedStatistic`: A statistic has no finite value for the given input
/// - `Cancelled`: The caller cancelled the computation
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("maturity", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'maturity': must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input parameter, naming the violated constraint.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// A parallel worker failed and the request was aborted.
    #[error("Worker {worker} failed: {reason}")]
    WorkerFailure {
        /// Index of the failing worker.
        worker: usize,
        /// Failure description.
        reason: String,
    },

    /// A statistic is undefined for the supplied data.
    #[error("Undefined statistic: {0}")]
    UndefinedStatistic(String),

    /// The computation was cancelled through its cancellation token.
    #[error("Computation cancelled")]
    Cancelled,
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by invalid input.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid("n_steps", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'n_steps': must be at least 1, got 0"
        );
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_worker_failure_display() {
        let err = PricingError::WorkerFailure {
            worker: 3,
            reason: "kernel panicked".to_string(),
        };
        assert_eq!(err.to_string(), "Worker 3 failed: kernel panicked");
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_undefined_statistic_display() {
        let err = PricingError::UndefinedStatistic("zero variance".to_string());
        assert!(err.to_string().contains("zero variance"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::Cancelled;
        let _: &dyn std::error::Error = &err;
        assert_eq!(err.clone(), PricingError::Cancelled);
    }
}
