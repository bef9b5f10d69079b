//! Static dispatch over the closed set of simulation models.
//!
//! The model set is fixed at GBM, Heston and Merton jump-diffusion, so
//! dispatch goes through a `match` on [`ModelParams`] rather than trait
//! objects.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{ModelKind, ModelParams};
//!
//! let kind: ModelKind = "Jump-Diffusion".parse().unwrap();
//! assert_eq!(kind, ModelKind::JumpDiffusion);
//!
//! let params = ModelParams::default_for(kind);
//! assert_eq!(params.kind(), ModelKind::JumpDiffusion);
//! assert!(!params.has_variance());
//! ```

use std::fmt;
use std::str::FromStr;

use super::gbm::GbmParams;
use super::heston::HestonParams;
use super::jump_diffusion::JumpDiffusionParams;
use crate::error::ModelError;

/// Model identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    /// Geometric Brownian Motion.
    Gbm,
    /// Heston stochastic volatility.
    Heston,
    /// Merton jump-diffusion.
    JumpDiffusion,
}

impl ModelKind {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Gbm => "gbm",
            ModelKind::Heston => "heston",
            ModelKind::JumpDiffusion => "jump_diffusion",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a model name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown model '{0}': expected gbm, heston or jump_diffusion")]
pub struct ParseModelKindError(pub String);

impl FromStr for ModelKind {
    type Err = ParseModelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gbm" => Ok(ModelKind::Gbm),
            "heston" => Ok(ModelKind::Heston),
            "jump_diffusion" | "jump-diffusion" | "merton" => Ok(ModelKind::JumpDiffusion),
            _ => Err(ParseModelKindError(s.to_string())),
        }
    }
}

/// Parameters for one of the supported models.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum ModelParams {
    /// GBM parameters.
    Gbm(GbmParams),
    /// Heston parameters.
    Heston(HestonParams),
    /// Jump-diffusion parameters.
    JumpDiffusion(JumpDiffusionParams),
}

impl ModelParams {
    /// Default parameter set for `kind`.
    pub fn default_for(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Gbm => ModelParams::Gbm(GbmParams::default()),
            ModelKind::Heston => ModelParams::Heston(HestonParams::default()),
            ModelKind::JumpDiffusion => ModelParams::JumpDiffusion(JumpDiffusionParams::default()),
        }
    }

    /// Which model these parameters belong to.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelParams::Gbm(_) => ModelKind::Gbm,
            ModelParams::Heston(_) => ModelKind::Heston,
            ModelParams::JumpDiffusion(_) => ModelKind::JumpDiffusion,
        }
    }

    /// Initial spot price.
    pub fn spot(&self) -> f64 {
        match self {
            ModelParams::Gbm(p) => p.spot,
            ModelParams::Heston(p) => p.spot,
            ModelParams::JumpDiffusion(p) => p.spot,
        }
    }

    /// Simulation horizon in years.
    pub fn maturity(&self) -> f64 {
        match self {
            ModelParams::Gbm(p) => p.maturity,
            ModelParams::Heston(p) => p.maturity,
            ModelParams::JumpDiffusion(p) => p.maturity,
        }
    }

    /// Returns true if simulation also produces a variance matrix.
    pub fn has_variance(&self) -> bool {
        matches!(self, ModelParams::Heston(_))
    }

    /// Validates the wrapped parameter set.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelParams::Gbm(p) => p.validate(),
            ModelParams::Heston(p) => p.validate(),
            ModelParams::JumpDiffusion(p) => p.validate(),
        }
    }
}

impl From<GbmParams> for ModelParams {
    fn from(params: GbmParams) -> Self {
        ModelParams::Gbm(params)
    }
}

impl From<HestonParams> for ModelParams {
    fn from(params: HestonParams) -> Self {
        ModelParams::Heston(params)
    }
}

impl From<JumpDiffusionParams> for ModelParams {
    fn from(params: JumpDiffusionParams) -> Self {
        ModelParams::JumpDiffusion(params)
    }
}
