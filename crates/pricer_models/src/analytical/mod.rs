//! Closed-form pricing for European options.
//!
//! This module provides:
//! - Black-Scholes prices for calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` in production, `f32` where memory matters
//! - **Numerical Stability**: erfc-based CDF, exactly symmetric so put-call
//!   parity holds to rounding

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{greeks, price_black_scholes, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
