//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! Path simulation and Monte Carlo pricing for vanilla options.
//!
//! This crate provides:
//! - A seedable generator handle with per-worker stream derivation (`rng`)
//! - GBM, Heston and Merton jump-diffusion path simulators (`mc`)
//! - European pricing and Longstaff-Schwartz American pricing (`mc`)
//! - Equal-shard parallel execution over a Rayon pool (`parallel`)
//! - Validating entry points that combine the above (`engine`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{ExerciseStyle, OptionParams};
//! use pricer_pricing::engine::price_parallel;
//! use pricer_pricing::mc::{CancellationToken, MonteCarloConfig};
//! use pricer_pricing::parallel::ParallelConfig;
//!
//! let config = MonteCarloConfig::builder().n_paths(40_000).n_steps(10).build().unwrap();
//! let parallel = ParallelConfig::new(4, 2024).unwrap();
//!
//! let result = price_parallel(
//!     &OptionParams::default(),
//!     ExerciseStyle::European,
//!     &config,
//!     &parallel,
//!     &CancellationToken::new(),
//! )
//! .unwrap();
//! assert!((result.price - 10.4506).abs() < 4.0 * result.std_error);
//! ```
//!
//! ## Logging
//!
//! Emits `tracing` events (`debug` for layout and exercise statistics,
//! `warn` for degenerate regressions and worker failures). No subscriber is
//! installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod mc;
pub mod parallel;
pub mod rng;
