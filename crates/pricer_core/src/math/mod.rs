//! Numerical kernels shared by the pricing crates.
//!
//! ## Available Modules
//!
//! - [`regression`]: SVD least squares on the `{1, x, x²}` basis, used by the
//!   regression-based early-exercise pricer

pub mod regression;
