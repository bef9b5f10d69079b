//! Return-series risk statistics.
//!
//! All loss measures use the loss-positive convention: a VaR of `0.03` means
//! a 3% loss at the chosen confidence. Degenerate input is reported through
//! [`RiskError`], never as NaN or infinity.
//!
//! # Percentiles
//!
//! Quantiles use linear interpolation between closest ranks: for sorted data
//! `x₀ ≤ … ≤ xₙ₋₁` the `q`-quantile sits at fractional index `q·(n−1)`.

use crate::error::RiskError;

/// Relative dispersion below which a series counts as constant.
const ZERO_VARIANCE_TOLERANCE: f64 = 1e-10;

/// Summary statistics for a single return series.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskMetricsResult {
    /// Value-at-Risk at the requested confidence (loss-positive).
    pub var: f64,
    /// Conditional Value-at-Risk (expected shortfall, loss-positive).
    pub cvar: f64,
    /// Sharpe ratio of per-period excess returns.
    pub sharpe: f64,
    /// Maximum drawdown of the compounded equity curve (≤ 0).
    pub max_drawdown: f64,
}

fn ensure_series(values: &[f64]) -> Result<(), RiskError> {
    if values.is_empty() {
        return Err(RiskError::EmptySeries);
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(RiskError::NonFiniteValue(index)),
        None => Ok(()),
    }
}

fn ensure_confidence(confidence: f64) -> Result<(), RiskError> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidConfidence(confidence))
    }
}

/// `q`-quantile of a sorted, non-empty slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Value-at-Risk: the negated `(1 − confidence)` quantile of the returns.
///
/// # Errors
///
/// `EmptySeries`, `NonFiniteValue` or `InvalidConfidence`.
///
/// # Examples
///
/// ```
/// use pricer_risk::metrics::value_at_risk;
///
/// let returns = [-0.05, -0.03, -0.01, 0.0, 0.01, 0.02, 0.03, 0.04, 0.05, 0.06];
/// let var = value_at_risk(&returns, 0.9).unwrap();
/// assert!((var - 0.032).abs() < 1e-12);
/// ```
pub fn value_at_risk(returns: &[f64], confidence: f64) -> Result<f64, RiskError> {
    ensure_series(returns)?;
    ensure_confidence(confidence)?;

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(-quantile_sorted(&sorted, 1.0 - confidence))
}

/// Conditional Value-at-Risk: mean loss over returns at or below `−VaR`.
///
/// The tail is never empty because the VaR quantile is bounded by the
/// smallest return.
pub fn conditional_var(returns: &[f64], confidence: f64) -> Result<f64, RiskError> {
    let threshold = -value_at_risk(returns, confidence)?;

    let (sum, count) = returns
        .iter()
        .filter(|&&r| r <= threshold)
        .fold((0.0, 0usize), |(sum, count), &r| (sum + r, count + 1));
    if count == 0 {
        return Err(RiskError::EmptySeries);
    }
    Ok(-sum / count as f64)
}

/// Sharpe ratio `mean(r − rf) / std(r − rf)` with population standard
/// deviation.
///
/// `risk_free_rate` must already be expressed per return period.
///
/// # Errors
///
/// `ZeroVariance` when the excess returns are constant up to rounding
/// (including a single-element series).
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Result<f64, RiskError> {
    ensure_series(returns)?;

    let excess: Vec<f64> = returns.iter().map(|r| r - risk_free_rate).collect();
    let (mean, std) = mean_and_std(&excess);

    // Rounding noise on a constant series must not produce a finite ratio.
    let scale = returns.iter().fold(risk_free_rate.abs(), |m, r| m.max(r.abs()));
    if std <= ZERO_VARIANCE_TOLERANCE * scale {
        return Err(RiskError::ZeroVariance);
    }
    Ok(mean / std)
}

/// Maximum drawdown: `min_t (V_t − peak_t) / peak_t`, where `peak_t` is the
/// running maximum.
///
/// The result is zero or negative; a non-decreasing curve yields exactly 0.
///
/// # Errors
///
/// `EmptySeries`, `NonFiniteValue`, or `NonPositiveEquity` for any value
/// that is not strictly positive.
pub fn maximum_drawdown(equity_curve: &[f64]) -> Result<f64, RiskError> {
    ensure_series(equity_curve)?;
    if let Some((index, &value)) = equity_curve.iter().enumerate().find(|&(_, &v)| v <= 0.0) {
        return Err(RiskError::NonPositiveEquity { index, value });
    }

    let mut peak = equity_curve[0];
    let mut worst = 0.0_f64;
    for &value in equity_curve {
        peak = peak.max(value);
        worst = worst.min((value - peak) / peak);
    }
    Ok(worst)
}

/// Equity curve obtained by compounding `returns` from an initial value of 1.
///
/// The curve has `returns.len() + 1` points.
pub fn equity_curve(returns: &[f64]) -> Vec<f64> {
    std::iter::once(1.0)
        .chain(returns.iter().scan(1.0, |equity, r| {
            *equity *= 1.0 + r;
            Some(*equity)
        }))
        .collect()
}

/// Maximum drawdown reported when the compounded equity is wiped out.
pub const TOTAL_LOSS_DRAWDOWN: f64 = -1.0;

/// Computes VaR, CVaR, Sharpe and maximum drawdown for one return series.
///
/// The drawdown is measured on [`equity_curve`] of the returns. A return of
/// −100% or worse takes the curve to zero or below; the drawdown is then
/// [`TOTAL_LOSS_DRAWDOWN`] and the other statistics are still reported.
///
/// # Examples
///
/// ```
/// use pricer_risk::metrics::risk_metrics;
///
/// let returns = [0.01, -0.02, 0.015, -0.005, 0.02, -0.01];
/// let result = risk_metrics(&returns, 0.95, 0.0).unwrap();
/// assert!(result.cvar >= result.var);
/// assert!(result.max_drawdown <= 0.0);
/// ```
pub fn risk_metrics(
    returns: &[f64],
    confidence: f64,
    risk_free_rate: f64,
) -> Result<RiskMetricsResult, RiskError> {
    let var = value_at_risk(returns, confidence)?;
    let cvar = conditional_var(returns, confidence)?;
    let sharpe = sharpe_ratio(returns, risk_free_rate)?;
    let max_drawdown = if returns.iter().any(|&r| r <= -1.0) {
        TOTAL_LOSS_DRAWDOWN
    } else {
        maximum_drawdown(&equity_curve(returns))?
    };

    Ok(RiskMetricsResult {
        var,
        cvar,
        sharpe,
        max_drawdown,
    })
}

/// Mean and population standard deviation of a non-empty slice.
pub(crate) fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
