//! Monte Carlo simulation and pricing kernels.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloConfig  (path count, step count, seed)
//! PricerRng         (explicit generator handle)
//! CancellationToken (checked per time step)
//!   ├── simulate_gbm / simulate_heston / simulate_jump_diffusion → PathMatrix
//!   │     ├── price_european_paths → PricingResult
//!   │     └── price_american_paths → PricingResult (Longstaff-Schwartz)
//!   └── simulate_gbm_terminal → Vec<f64>
//!         └── price_european_terminal → PricingResult
//! ```
//!
//! Every call allocates its own buffers and nothing is cached between calls.
//! Full path matrices are sized `n_paths × (n_steps + 1)` and limited to
//! [`MAX_MATRIX_ENTRIES`] values; the terminal-only route needs `O(n_paths)`.

mod american;
mod cancel;
mod config;
mod error;
mod european;
mod matrix;
mod paths;
mod result;

pub use american::price_american_paths;
pub use cancel::CancellationToken;
pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, MAX_MATRIX_ENTRIES, MAX_PATHS, MAX_STEPS,
};
pub use error::ConfigError;
pub use european::{price_european_paths, price_european_terminal};
pub use matrix::{PathMatrix, VarianceMatrix};
pub use paths::{
    simulate, simulate_gbm, simulate_gbm_terminal, simulate_heston, simulate_jump_diffusion,
    SimulatedPaths,
};
pub use result::PricingResult;
