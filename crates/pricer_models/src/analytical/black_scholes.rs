//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes closed form for European
//! call and put options with analytical Greeks. It is the deterministic
//! reference the Monte Carlo pricers converge to.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::types::{OptionType, PricingError};

use super::distributions::{lit, norm_cdf, norm_pdf};
use crate::error::{ensure_positive, ModelError};
use crate::instruments::OptionParams;

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call);
/// let put = bs.price(100.0, 1.0, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

/// The five first-order sensitivities of an option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂t per year of calendar time.
    pub theta: T,
    /// ∂V/∂σ per unit of volatility.
    pub vega: T,
    /// ∂V/∂r per unit of rate.
    pub rho: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// `ModelError::InvalidParameter` if spot or volatility is not strictly
    /// positive, or rate is not finite. The closed form divides by σ√T, so
    /// zero volatility is rejected here even though the simulators accept it.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ModelError> {
        ensure_positive("spot", spot.to_f64().unwrap_or(f64::NAN))?;
        ensure_positive("volatility", volatility.to_f64().unwrap_or(f64::NAN))?;
        if !rate.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
                constraint: "finite",
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + lit::<T>(0.5) * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / (self.volatility * expiry.sqrt())
    }

    /// d₂ = d₁ − σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Option price.
    ///
    /// Expiry must be positive; callers validate through [`OptionParams`].
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Delta: N(d₁) for a call, N(d₁) − 1 for a put.
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        self.spot * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }

    /// Theta.
    ///
    /// - Call: −(S·σ·φ(d₁))/(2√T) − r·K·e^(−rT)·N(d₂)
    /// - Put:  −(S·σ·φ(d₁))/(2√T) + r·K·e^(−rT)·N(−d₂)
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        let decay =
            -(self.spot * self.volatility * norm_pdf(d1)) / (lit::<T>(2.0) * expiry.sqrt());

        match option_type {
            OptionType::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            OptionType::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Rho: K·T·e^(−rT)·N(d₂) for a call, −K·T·e^(−rT)·N(−d₂) for a put.
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let d2 = self.d2(strike, expiry);
        let scale = strike * expiry * (-self.rate * expiry).exp();
        match option_type {
            OptionType::Call => scale * norm_cdf(d2),
            OptionType::Put => -scale * norm_cdf(-d2),
        }
    }

    /// All five Greeks at once.
    pub fn greeks(&self, strike: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            vega: self.vega(strike, expiry),
            rho: self.rho(strike, expiry, option_type),
        }
    }
}

fn model_for(params: &OptionParams) -> Result<BlackScholes<f64>, PricingError> {
    params.validate()?;
    Ok(BlackScholes::new(params.spot, params.rate, params.volatility)?)
}

/// Black-Scholes price of a European option.
///
/// # Errors
/// `PricingError::InvalidParameter` naming the first violated constraint.
/// Volatility must be strictly positive.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price_black_scholes;
/// use pricer_models::instruments::OptionParams;
///
/// let price = price_black_scholes(&OptionParams::default()).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn price_black_scholes(params: &OptionParams) -> Result<f64, PricingError> {
    let model = model_for(params)?;
    Ok(model.price(params.strike, params.maturity, params.option_type))
}

/// Black-Scholes Greeks of a European option.
///
/// # Errors
/// Same as [`price_black_scholes`].
pub fn greeks(params: &OptionParams) -> Result<Greeks<f64>, PricingError> {
    let model = model_for(params)?;
    Ok(model.greeks(params.strike, params.maturity, params.option_type))
}
