//! Geometric Brownian Motion (GBM) parameters.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = μ S dt + σ S dW
//! ```
//!
//! Simulation uses the exact log-space step
//! ```text
//! S(t+dt) = S(t) · exp((μ − σ²/2)dt + σ√dt · Z)
//! ```
//! so σ = 0 degenerates to deterministic growth at rate μ.

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, ModelError};

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift (μ), the risk-free rate under the pricing measure.
    pub drift: f64,
    /// Volatility (σ).
    pub volatility: f64,
    /// Horizon in years (T).
    pub maturity: f64,
}

impl GbmParams {
    /// Creates validated GBM parameters.
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Result<Self, ModelError> {
        let params = Self {
            spot,
            drift,
            volatility,
            maturity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its constraint.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_positive("spot", self.spot)?;
        ensure_finite("drift", self.drift)?;
        ensure_non_negative("volatility", self.volatility)?;
        ensure_positive("maturity", self.maturity)?;
        Ok(())
    }

    /// Per-step log drift `(μ − σ²/2)dt` and diffusion scale `σ√dt`.
    #[inline]
    pub fn step_coefficients(&self, dt: f64) -> (f64, f64) {
        let drift_dt = (self.drift - 0.5 * self.volatility * self.volatility) * dt;
        let vol_sqrt_dt = self.volatility * dt.sqrt();
        (drift_dt, vol_sqrt_dt)
    }

    /// Expected terminal value `S₀ e^(μT)`.
    #[inline]
    pub fn expected_terminal(&self) -> f64 {
        self.spot * (self.drift * self.maturity).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}
