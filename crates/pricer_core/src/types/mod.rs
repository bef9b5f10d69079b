//! Core financial types.
//!
//! This module provides:
//! - `option`: Call/put direction with intrinsic value and parsing
//! - `error`: Structured error types for pricing, simulation and risk operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

pub use error::PricingError;
pub use option::{OptionType, ParseOptionTypeError};
