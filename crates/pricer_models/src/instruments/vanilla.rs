//! Vanilla option parameters.

use pricer_core::types::OptionType;

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, ModelError};
use crate::models::GbmParams;

/// Market and contract inputs for a single-asset vanilla option.
///
/// The same parameter set feeds the closed-form pricer and both Monte Carlo
/// pricers, so their results are directly comparable.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// // Zero maturity is rejected before anything is simulated.
/// assert!(OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Spot price (S₀).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Lognormal volatility (σ).
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl OptionParams {
    /// Creates validated option parameters.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` if spot, strike or maturity is
    /// not positive, volatility is negative, or any input is not finite.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, ModelError> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its constraint.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("maturity", self.maturity)?;
        ensure_finite("rate", self.rate)?;
        ensure_non_negative("volatility", self.volatility)?;
        Ok(())
    }

    /// Discount factor to maturity, `e^(−rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Intrinsic value at spot `s`.
    #[inline]
    pub fn intrinsic(&self, s: f64) -> f64 {
        self.option_type.intrinsic(s, self.strike)
    }

    /// Risk-neutral GBM dynamics for the underlying (drift = rate).
    pub fn risk_neutral_gbm(&self) -> GbmParams {
        GbmParams {
            spot: self.spot,
            drift: self.rate,
            volatility: self.volatility,
            maturity: self.maturity,
        }
    }

    /// Returns a copy with the opposite option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }
}

impl Default for OptionParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}
