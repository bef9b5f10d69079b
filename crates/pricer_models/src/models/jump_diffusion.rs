//! Merton jump-diffusion parameters.
//!
//! GBM with compound Poisson jumps in the log-price:
//! ```text
//! ln S(t+dt) = ln S(t) + (μ − σ²/2)dt + σ√dt · Z + Σᵢ₌₁ᴺ Jᵢ
//! N ~ Poisson(λ dt),  Jᵢ ~ N(μ_J, σ_J²)
//! ```
//! The drift is not compensated for the jump mean; μ is used as given.

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, ModelError};

use super::gbm::GbmParams;

/// Jump-diffusion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JumpDiffusionParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift (μ).
    pub drift: f64,
    /// Diffusive volatility (σ).
    pub volatility: f64,
    /// Jump intensity per year (λ).
    pub jump_intensity: f64,
    /// Mean of a single log-jump (μ_J).
    pub jump_mean: f64,
    /// Standard deviation of a single log-jump (σ_J).
    pub jump_volatility: f64,
    /// Horizon in years (T).
    pub maturity: f64,
}

impl JumpDiffusionParams {
    /// Checks every field against its constraint.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_positive("spot", self.spot)?;
        ensure_finite("drift", self.drift)?;
        ensure_non_negative("volatility", self.volatility)?;
        ensure_non_negative("jump_intensity", self.jump_intensity)?;
        ensure_finite("jump_mean", self.jump_mean)?;
        ensure_non_negative("jump_volatility", self.jump_volatility)?;
        ensure_positive("maturity", self.maturity)?;
        Ok(())
    }

    /// The diffusive part on its own.
    pub fn diffusion(&self) -> GbmParams {
        GbmParams {
            spot: self.spot,
            drift: self.drift,
            volatility: self.volatility,
            maturity: self.maturity,
        }
    }

    /// Expected number of jumps per step of length `dt`.
    #[inline]
    pub fn jumps_per_step(&self, dt: f64) -> f64 {
        self.jump_intensity * dt
    }
}

impl Default for JumpDiffusionParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            jump_intensity: 0.5,
            jump_mean: -0.1,
            jump_volatility: 0.15,
            maturity: 1.0,
        }
    }
}
