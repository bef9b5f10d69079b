//! Portfolio command implementation
//!
//! Reads a JSON portfolio definition:
//!
//! ```json
//! {
//!   "rate": 0.05,
//!   "horizon": 1.0,
//!   "assets": [
//!     { "spot": 100.0, "volatility": 0.2, "weight": 0.6 },
//!     { "spot": 50.0, "volatility": 0.35, "weight": 0.4 }
//!   ]
//! }
//! ```
//!
//! `paths` (default 1000) and `steps` (default: configured steps) may also
//! be given in the file.

use std::path::Path;

use pricer_core::types::PricingError;
use pricer_pricing::mc::{CancellationToken, MonteCarloConfig};
use pricer_risk::{portfolio_risk, Asset, PortfolioRiskReport};
use serde::Deserialize;
use tracing::info;

use super::print_json;
use crate::config::CliConfig;
use crate::{CliError, Result};

const DEFAULT_PORTFOLIO_PATHS: usize = 1_000;

/// Portfolio definition file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioFile {
    /// Risk-free rate, also the drift of every asset.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Horizon in years.
    #[serde(default = "default_horizon")]
    pub horizon: f64,
    /// Holdings.
    pub assets: Vec<Asset>,
    /// Simulated paths.
    #[serde(default)]
    pub paths: Option<usize>,
    /// Time steps over the horizon.
    #[serde(default)]
    pub steps: Option<usize>,
}

fn default_rate() -> f64 {
    0.05
}

fn default_horizon() -> f64 {
    1.0
}

/// Loads a portfolio definition.
pub fn load(path: &Path) -> Result<PortfolioFile> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

/// Simulates the portfolio and computes its risk report.
pub fn compute(portfolio: &PortfolioFile, config: &CliConfig) -> Result<PortfolioRiskReport> {
    let mc_config = MonteCarloConfig::builder()
        .n_paths(portfolio.paths.unwrap_or(DEFAULT_PORTFOLIO_PATHS))
        .n_steps(portfolio.steps.unwrap_or(config.steps))
        .maybe_seed(config.seed)
        .build()
        .map_err(PricingError::from)?;
    let rng = config.rng();

    info!(
        n_assets = portfolio.assets.len(),
        paths = mc_config.n_paths(),
        steps = mc_config.n_steps(),
        seed = rng.seed(),
        "simulating portfolio"
    );

    Ok(portfolio_risk(
        &portfolio.assets,
        portfolio.rate,
        portfolio.horizon,
        &mc_config,
        &rng,
        &CancellationToken::new(),
    )?)
}

/// Run the portfolio command
pub fn run(file: &Path, config: &CliConfig) -> Result<()> {
    let portfolio = load(file)?;
    print_json(&compute(&portfolio, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            seed: Some(5),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_parse_with_defaults() {
        let portfolio: PortfolioFile =
            serde_json::from_str(r#"{"assets": [{"spot": 50.0}, {"volatility": 0.3, "weight": 2}]}"#)
                .unwrap();
        assert_eq!(portfolio.rate, 0.05);
        assert_eq!(portfolio.horizon, 1.0);
        assert_eq!(portfolio.assets[0].volatility, 0.2);
        assert_eq!(portfolio.assets[0].weight, 1.0);
        assert_eq!(portfolio.assets[1].spot, 100.0);
        assert_eq!(portfolio.assets[1].weight, 2.0);
    }

    #[test]
    fn test_compute_small_portfolio() {
        let portfolio: PortfolioFile = serde_json::from_str(
            r#"{"assets": [{"spot": 100.0, "volatility": 0.2}, {"spot": 40.0, "volatility": 0.4}],
                "paths": 200, "steps": 50}"#,
        )
        .unwrap();
        let report = compute(&portfolio, &config()).unwrap();
        assert!(report.conditional_var_95 >= report.value_at_risk_95);
        assert!(report.volatility > 0.0);
        assert_eq!(compute(&portfolio, &config()).unwrap(), report);
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        let portfolio: PortfolioFile = serde_json::from_str(r#"{"assets": []}"#).unwrap();
        let err = compute(&portfolio, &config()).unwrap_err();
        assert!(err.to_string().contains("portfolio"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<PortfolioFile>(r#"{"assets": [], "horizn": 2}"#).is_err());
    }
}
