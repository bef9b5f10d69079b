//! Risk statistics on simulated return series.

use pricer_core::types::PricingError;
use pricer_models::models::GbmParams;
use pricer_pricing::mc::{simulate_gbm, CancellationToken, MonteCarloConfig};
use pricer_pricing::rng::PricerRng;
use pricer_risk::metrics::{maximum_drawdown, value_at_risk};
use pricer_risk::{risk_metrics, RiskError};

fn simulated_returns(seed: u64) -> Vec<f64> {
    let config = MonteCarloConfig::builder()
        .n_paths(1)
        .n_steps(2_000)
        .seed(seed)
        .build()
        .unwrap();
    let params = GbmParams {
        spot: 100.0,
        drift: 0.08,
        volatility: 0.25,
        maturity: 2_000.0 / 252.0,
    };
    let paths = simulate_gbm(
        &params,
        &config,
        &mut PricerRng::from_seed(seed),
        &CancellationToken::new(),
    )
    .unwrap();
    paths.path(0).windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

#[test]
fn test_var_deeper_tail_is_larger() {
    for seed in 0..5 {
        let returns = simulated_returns(seed);
        let var95 = value_at_risk(&returns, 0.95).unwrap();
        let var99 = value_at_risk(&returns, 0.99).unwrap();
        assert!(var99 >= var95, "seed {}: {} < {}", seed, var99, var95);
    }
}

#[test]
fn test_metrics_on_simulated_series() {
    let returns = simulated_returns(17);
    let result = risk_metrics(&returns, 0.99, 0.08 / 252.0).unwrap();

    // Daily 99% VaR ≈ 2.326 · 0.25/√252.
    assert!(result.var > 0.025 && result.var < 0.048, "VaR = {}", result.var);
    assert!(result.cvar > result.var);
    assert!(result.sharpe.is_finite());
    assert!(result.max_drawdown < 0.0 && result.max_drawdown > -1.0);
}

#[test]
fn test_strictly_increasing_equity_has_no_drawdown() {
    let curve: Vec<f64> = (1..=100).map(|i| 100.0 * 1.001_f64.powi(i)).collect();
    assert_eq!(maximum_drawdown(&curve).unwrap(), 0.0);
}

#[test]
fn test_constant_returns_report_undefined_sharpe() {
    let err = risk_metrics(&[0.001; 50], 0.95, 0.0).unwrap_err();
    assert_eq!(err, RiskError::ZeroVariance);
    assert!(matches!(
        PricingError::from(err),
        PricingError::UndefinedStatistic(_)
    ));
}
