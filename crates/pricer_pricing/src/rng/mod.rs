//! # Random Number Generation
//!
//! Seeded random number generation for the Monte Carlo simulators.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is seeded and remembers its seed
//! - **Explicit handles**: simulators receive `&mut PricerRng`; there is no
//!   global or thread-local generator
//! - **Independence**: parallel workers use streams derived from a master
//!   seed with [`PricerRng::derive`]
//! - **Batching**: `fill_normal` and `fill_poisson` draw a whole time step
//!   for every path at once
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let master = PricerRng::from_seed(12345);
//! let mut worker = master.derive(0);
//!
//! let mut shocks = vec![0.0; 1000];
//! worker.fill_normal(&mut shocks);
//!
//! let mut jumps = vec![0_u64; 1000];
//! worker.fill_poisson(0.01, &mut jumps);
//! ```

mod prng;

pub use prng::PricerRng;
