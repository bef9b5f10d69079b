//! # pricer_core: Foundation Layer for the Monte Carlo Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option direction and its case-insensitive parsing (`types::option`)
//! - The top-level error type shared by every pricer crate (`types::error`)
//! - Least-squares regression on a polynomial basis via SVD (`math::regression`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - nalgebra: Singular value decomposition for regression
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_core::math::regression::fit_quadratic;
//!
//! let option_type: OptionType = "PUT".parse().unwrap();
//! assert_eq!(option_type.intrinsic(100.0, 90.0), 10.0);
//!
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! let ys: Vec<f64> = xs.iter().map(|x| 1.0 + 2.0 * x + 0.5 * x * x).collect();
//! let fit = fit_quadratic(&xs, &ys);
//! assert!((fit.predict(5.0) - 23.5).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
