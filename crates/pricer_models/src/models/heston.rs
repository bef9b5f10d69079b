//! Heston stochastic volatility parameters.
//!
//! The Heston model is described by the SDEs:
//! ```text
//! dS = r S dt + √v S dW_S
//! dv = κ(θ − v) dt + ξ √v dW_v
//! E[dW_S dW_v] = ρ dt
//! ```
//! where:
//! - v = instantaneous variance
//! - κ = mean-reversion speed
//! - θ = long-run variance
//! - ξ = volatility of variance (vol-of-vol)
//! - ρ = spot/variance correlation
//!
//! ## Feller condition
//!
//! `2κθ > ξ²` keeps the continuous-time variance strictly positive. The
//! discretised scheme truncates at zero regardless, so the condition is
//! reported but not enforced.

use crate::error::{
    ensure_correlation, ensure_finite, ensure_non_negative, ensure_positive, ModelError,
};

/// Heston model parameters.
///
/// # Examples
///
/// ```
/// use pricer_models::models::HestonParams;
///
/// let params = HestonParams::new(100.0, 0.04, 1.5, 0.04, 0.3, -0.7, 0.05, 1.0).unwrap();
/// assert!(params.satisfies_feller());
/// assert!(HestonParams::new(100.0, 0.04, 1.5, 0.04, 0.3, -1.2, 0.05, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HestonParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Initial variance (v₀).
    pub v0: f64,
    /// Mean-reversion speed (κ).
    pub kappa: f64,
    /// Long-run variance (θ).
    pub theta: f64,
    /// Volatility of variance (ξ).
    pub xi: f64,
    /// Spot/variance correlation (ρ).
    pub rho: f64,
    /// Risk-free rate (r).
    pub rate: f64,
    /// Horizon in years (T).
    pub maturity: f64,
}

impl HestonParams {
    /// Creates validated Heston parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: f64,
        v0: f64,
        kappa: f64,
        theta: f64,
        xi: f64,
        rho: f64,
        rate: f64,
        maturity: f64,
    ) -> Result<Self, ModelError> {
        let params = Self {
            spot,
            v0,
            kappa,
            theta,
            xi,
            rho,
            rate,
            maturity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its constraint.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_positive("spot", self.spot)?;
        ensure_non_negative("v0", self.v0)?;
        ensure_non_negative("kappa", self.kappa)?;
        ensure_non_negative("theta", self.theta)?;
        ensure_non_negative("xi", self.xi)?;
        ensure_correlation("rho", self.rho)?;
        ensure_finite("rate", self.rate)?;
        ensure_positive("maturity", self.maturity)?;
        Ok(())
    }

    /// Returns true if `2κθ > ξ²`.
    #[inline]
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta > self.xi * self.xi
    }

    /// `√(1 − ρ²)`, the weight of the independent variance shock.
    #[inline]
    pub fn rho_complement(&self) -> f64 {
        (1.0 - self.rho * self.rho).max(0.0).sqrt()
    }
}

impl Default for HestonParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            v0: 0.04,
            kappa: 2.0,
            theta: 0.04,
            xi: 0.3,
            rho: -0.7,
            rate: 0.05,
            maturity: 1.0,
        }
    }
}
