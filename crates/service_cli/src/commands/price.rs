//! Price command implementation
//!
//! Prices a vanilla option in closed form and, unless `--style analytic`,
//! with the parallel Monte Carlo engine.

use clap::ValueEnum;
use pricer_core::types::OptionType;
use pricer_models::analytical::price_black_scholes;
use pricer_models::instruments::ExerciseStyle;
use pricer_pricing::engine::price_parallel;
use pricer_pricing::mc::{CancellationToken, PricingResult};
use serde::Serialize;
use tracing::info;

use super::{print_json, OptionArgs};
use crate::config::CliConfig;
use crate::Result;

/// Pricing method selected with `--style`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStyle {
    /// Monte Carlo, exercise at maturity only
    European,
    /// Monte Carlo with Longstaff-Schwartz early exercise
    American,
    /// Black-Scholes closed form only
    Analytic,
}

/// JSON output of `mcq price`.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    /// Call or put.
    pub option_type: OptionType,
    /// Requested method.
    pub style: PriceStyle,
    /// Closed-form European value; absent for zero volatility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<f64>,
    /// Monte Carlo estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo: Option<PricingResult>,
    /// 95% confidence interval of the Monte Carlo estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_interval_95: Option<(f64, f64)>,
}

/// Builds the price report.
pub fn compute(args: &OptionArgs, style: PriceStyle, config: &CliConfig) -> Result<PriceReport> {
    let params = args.to_params()?;

    let exercise = match style {
        PriceStyle::Analytic => {
            return Ok(PriceReport {
                option_type: params.option_type,
                style,
                black_scholes: Some(price_black_scholes(&params)?),
                monte_carlo: None,
                confidence_interval_95: None,
            });
        }
        PriceStyle::European => ExerciseStyle::European,
        PriceStyle::American => ExerciseStyle::American,
    };

    let mc_config = config.monte_carlo(config.paths)?;
    let parallel = config.parallel()?;
    info!(
        style = %exercise,
        paths = config.paths,
        steps = config.steps,
        workers = parallel.workers(),
        seed = parallel.master_seed(),
        "pricing"
    );

    let result = price_parallel(
        &params,
        exercise,
        &mc_config,
        &parallel,
        &CancellationToken::new(),
    )?;

    Ok(PriceReport {
        option_type: params.option_type,
        style,
        // Closed form needs σ > 0; Monte Carlo also accepts σ = 0.
        black_scholes: price_black_scholes(&params).ok(),
        monte_carlo: Some(result),
        confidence_interval_95: Some(result.confidence_interval_95()),
    })
}

/// Run the price command
pub fn run(args: &OptionArgs, style: PriceStyle, config: &CliConfig) -> Result<()> {
    print_json(&compute(args, style, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> OptionArgs {
        OptionArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            vol: 0.2,
            option_type: OptionType::Call,
        }
    }

    fn config() -> CliConfig {
        CliConfig {
            paths: 20_000,
            steps: 10,
            seed: Some(42),
            workers: Some(2),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_analytic_has_no_monte_carlo() {
        let report = compute(&args(), PriceStyle::Analytic, &config()).unwrap();
        assert!((report.black_scholes.unwrap() - 10.4506).abs() < 1e-4);
        assert!(report.monte_carlo.is_none());
    }

    #[test]
    fn test_european_reports_both_prices() {
        let report = compute(&args(), PriceStyle::European, &config()).unwrap();
        let mc = report.monte_carlo.unwrap();
        let bs = report.black_scholes.unwrap();
        assert!((mc.price - bs).abs() < 4.0 * mc.std_error);

        let (lo, hi) = report.confidence_interval_95.unwrap();
        assert!(lo < mc.price && mc.price < hi);
    }

    #[test]
    fn test_zero_volatility_skips_closed_form() {
        let flat = OptionArgs { vol: 0.0, ..args() };
        let report = compute(&flat, PriceStyle::European, &config()).unwrap();
        assert!(report.black_scholes.is_none());
        assert!(report.monte_carlo.is_some());

        assert!(compute(&flat, PriceStyle::Analytic, &config()).is_err());
    }

    #[test]
    fn test_invalid_maturity_rejected() {
        let expired = OptionArgs { maturity: 0.0, ..args() };
        let err = compute(&expired, PriceStyle::American, &config()).unwrap_err();
        assert!(err.to_string().contains("maturity"));
    }

    #[test]
    fn test_report_serialises_lowercase_style() {
        let report = compute(&args(), PriceStyle::Analytic, &config()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["style"], "analytic");
        assert_eq!(json["option_type"], "call");
        assert!(json.get("monte_carlo").is_none());
    }
}
