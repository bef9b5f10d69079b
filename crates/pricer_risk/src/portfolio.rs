//! Portfolio risk simulation.
//!
//! Each asset follows its own GBM under the portfolio rate. The weighted sum
//! of asset paths forms a portfolio value matrix whose per-step simple
//! returns feed the statistics in [`crate::metrics`].

use pricer_core::types::PricingError;
use pricer_models::models::GbmParams;
use pricer_pricing::mc::{simulate_gbm, CancellationToken, MonteCarloConfig, PathMatrix};
use pricer_pricing::rng::PricerRng;
use rayon::prelude::*;
use tracing::debug;

use crate::error::RiskError;
use crate::metrics::{
    conditional_var, maximum_drawdown, mean_and_std, sharpe_ratio, value_at_risk,
};

/// Periods per year used to scale per-step statistics.
pub const TRADING_DAYS: f64 = 252.0;

/// Confidence level of the reported VaR and CVaR.
pub const PORTFOLIO_CONFIDENCE: f64 = 0.95;

/// A single portfolio holding.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Asset {
    /// Initial price.
    pub spot: f64,
    /// Lognormal volatility.
    pub volatility: f64,
    /// Relative weight; weights are normalised to sum to one.
    pub weight: f64,
}

impl Default for Asset {
    fn default() -> Self {
        Self {
            spot: 100.0,
            volatility: 0.2,
            weight: 1.0,
        }
    }
}

/// Risk statistics of a simulated portfolio.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioRiskReport {
    /// 95% Value-at-Risk of per-step returns.
    pub value_at_risk_95: f64,
    /// 95% Conditional Value-at-Risk of per-step returns.
    pub conditional_var_95: f64,
    /// Per-step Sharpe ratio against `rate / 252`.
    pub sharpe_ratio: f64,
    /// Maximum drawdown of the path-averaged value curve.
    pub maximum_drawdown: f64,
    /// Mean per-step return × 252.
    pub expected_return: f64,
    /// Per-step return standard deviation × √252.
    pub volatility: f64,
}

/// Normalises weights to sum to one.
fn normalised_weights(assets: &[Asset]) -> Result<Vec<f64>, RiskError> {
    if assets.is_empty() {
        return Err(RiskError::InvalidPortfolio("no assets".to_string()));
    }
    if let Some(index) = assets
        .iter()
        .position(|a| !a.weight.is_finite() || a.weight < 0.0)
    {
        return Err(RiskError::InvalidPortfolio(format!(
            "weight of asset {} must be finite and non-negative, got {}",
            index, assets[index].weight
        )));
    }

    let total: f64 = assets.iter().map(|a| a.weight).sum();
    if total <= 0.0 {
        return Err(RiskError::InvalidPortfolio(
            "weights must have a positive sum".to_string(),
        ));
    }
    Ok(assets.iter().map(|a| a.weight / total).collect())
}

/// Simulates a weighted GBM portfolio and reports its risk statistics.
///
/// Asset `i` draws from `rng.derive(i)`, so results are reproducible for a
/// seeded handle and independent of scheduling. Assets are simulated in
/// parallel.
///
/// # Errors
///
/// - `InvalidParameter` for an empty portfolio, invalid weights, or invalid
///   asset/horizon parameters
/// - `UndefinedStatistic` when the portfolio returns have no dispersion
///   (every volatility zero)
/// - `Cancelled` if the token fires during simulation
///
/// # Examples
///
/// ```
/// use pricer_pricing::mc::{CancellationToken, MonteCarloConfig};
/// use pricer_pricing::rng::PricerRng;
/// use pricer_risk::portfolio::{portfolio_risk, Asset};
///
/// let assets = [Asset::default(), Asset { spot: 50.0, volatility: 0.3, weight: 0.5 }];
/// let config = MonteCarloConfig::builder().n_paths(200).n_steps(252).build().unwrap();
///
/// let report = portfolio_risk(
///     &assets,
///     0.05,
///     1.0,
///     &config,
///     &PricerRng::from_seed(7),
///     &CancellationToken::new(),
/// )
/// .unwrap();
/// assert!(report.conditional_var_95 >= report.value_at_risk_95);
/// ```
pub fn portfolio_risk(
    assets: &[Asset],
    rate: f64,
    horizon: f64,
    config: &MonteCarloConfig,
    rng: &PricerRng,
    cancel: &CancellationToken,
) -> Result<PortfolioRiskReport, PricingError> {
    let weights = normalised_weights(assets)?;

    let paths: Vec<PathMatrix> = assets
        .par_iter()
        .enumerate()
        .map(|(index, asset)| {
            let params = GbmParams {
                spot: asset.spot,
                drift: rate,
                volatility: asset.volatility,
                maturity: horizon,
            };
            simulate_gbm(&params, config, &mut rng.derive(index), cancel)
        })
        .collect::<Result<_, _>>()?;

    let (n_paths, n_steps) = (config.n_paths(), config.n_steps());
    let n_points = n_steps + 1;

    let mut values = vec![0.0; n_paths * n_points];
    for (matrix, weight) in paths.iter().zip(&weights) {
        for (value, price) in values.iter_mut().zip(matrix.as_slice()) {
            *value += weight * price;
        }
    }

    let returns: Vec<f64> = values
        .chunks_exact(n_points)
        .flat_map(|row| row.windows(2).map(|w| (w[1] - w[0]) / w[0]))
        .collect();

    let mut mean_curve = vec![0.0; n_points];
    for row in values.chunks_exact(n_points) {
        for (acc, v) in mean_curve.iter_mut().zip(row) {
            *acc += v;
        }
    }
    for acc in &mut mean_curve {
        *acc /= n_paths as f64;
    }

    debug!(
        n_assets = assets.len(),
        n_paths,
        n_steps,
        n_returns = returns.len(),
        "simulated portfolio"
    );

    let (mean, std) = mean_and_std(&returns);
    Ok(PortfolioRiskReport {
        value_at_risk_95: value_at_risk(&returns, PORTFOLIO_CONFIDENCE)?,
        conditional_var_95: conditional_var(&returns, PORTFOLIO_CONFIDENCE)?,
        sharpe_ratio: sharpe_ratio(&returns, rate / TRADING_DAYS)?,
        maximum_drawdown: maximum_drawdown(&mean_curve)?,
        expected_return: mean * TRADING_DAYS,
        volatility: std * TRADING_DAYS.sqrt(),
    })
}
