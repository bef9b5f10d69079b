//! Error types for model and instrument parameter validation.
//!
//! This module provides:
//! - `ModelError`: A parameter outside its admissible range
//! - Validation helpers shared by every parameter set

use pricer_core::types::PricingError;
use thiserror::Error;

/// Parameter validation errors.
///
/// # Examples
/// ```
/// use pricer_models::ModelError;
///
/// let err = ModelError::InvalidParameter {
///     name: "volatility",
///     value: -0.2,
///     constraint: "non-negative and finite",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid volatility = -0.2: must be non-negative and finite"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// A parameter violated its constraint.
    #[error("Invalid {name} = {value}: must be {constraint}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable constraint
        constraint: &'static str,
    },
}

impl ModelError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ModelError::InvalidParameter { name, .. } => name,
        }
    }
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidParameter {
                name,
                value,
                constraint,
            } => PricingError::invalid(name, format!("must be {}, got {}", constraint, value)),
        }
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            constraint: "positive and finite",
        })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            constraint: "non-negative and finite",
        })
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            constraint: "finite",
        })
    }
}

pub(crate) fn ensure_correlation(name: &'static str, value: f64) -> Result<(), ModelError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            constraint: "within [-1, 1]",
        })
    }
}
