//! Stochastic model parameter sets.
//!
//! This module provides the parameters for the three simulation models:
//! - `GbmParams`: Geometric Brownian Motion
//! - `HestonParams`: Heston stochastic volatility
//! - `JumpDiffusionParams`: Merton jump-diffusion
//!
//! `ModelParams` wraps them for static dispatch. Path generation itself
//! lives in `pricer_pricing::mc`.

pub mod gbm;
pub mod heston;
pub mod jump_diffusion;
pub mod model_enum;

pub use gbm::GbmParams;
pub use heston::HestonParams;
pub use jump_diffusion::JumpDiffusionParams;
pub use model_enum::{ModelKind, ModelParams, ParseModelKindError};
