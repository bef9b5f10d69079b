//! Longstaff-Schwartz American pricing tests.
//!
//! # Test Categories
//!
//! 1. **Early-exercise premium**: American ≥ European on identical paths
//! 2. **Reference values**: agreement with the Longstaff-Schwartz (2001) table
//! 3. **Degenerate inputs**: deep OTM and zero volatility

use pricer_core::types::OptionType;
use pricer_models::instruments::OptionParams;
use pricer_pricing::engine::price_american;
use pricer_pricing::mc::{
    price_american_paths, price_european_paths, simulate_gbm, CancellationToken,
    MonteCarloConfig,
};
use pricer_pricing::rng::PricerRng;

fn config(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloConfig {
    MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .build()
        .unwrap()
}

fn both_on_same_paths(params: &OptionParams, n_paths: usize, n_steps: usize, seed: u64) -> (f64, f64, f64) {
    let cancel = CancellationToken::new();
    let paths = simulate_gbm(
        &params.risk_neutral_gbm(),
        &config(n_paths, n_steps, seed),
        &mut PricerRng::from_seed(seed),
        &cancel,
    )
    .unwrap();

    let european =
        price_european_paths(&paths, params.strike, params.option_type, params.discount_factor());
    let american = price_american_paths(
        &paths,
        params.strike,
        params.option_type,
        params.rate,
        params.maturity,
        &cancel,
    )
    .unwrap();
    (american.price, european.price, european.std_error)
}

// ============================================================================
// Early-Exercise Premium
// ============================================================================

#[test]
fn test_american_put_at_least_european_same_paths() {
    let params = OptionParams::default().with_option_type(OptionType::Put);
    let (american, european, _) = both_on_same_paths(&params, 20_000, 50, 42);
    assert!(
        american >= european,
        "American={:.4}, European={:.4}",
        american,
        european
    );
}

#[test]
fn test_american_put_premium_across_moneyness() {
    for (strike, seed) in [(90.0, 1), (100.0, 2), (110.0, 3), (120.0, 4)] {
        let params = OptionParams {
            strike,
            option_type: OptionType::Put,
            ..OptionParams::default()
        };
        let (american, european, _) = both_on_same_paths(&params, 10_000, 25, seed);
        assert!(
            american >= european,
            "K={}: American={:.4}, European={:.4}",
            strike,
            american,
            european
        );
    }
}

#[test]
fn test_american_call_close_to_european_without_dividends() {
    // Early exercise of a call on a non-dividend asset is never optimal; the
    // regression may still trigger a few spurious exercises.
    let params = OptionParams::default();
    let (american, european, se) = both_on_same_paths(&params, 20_000, 50, 9);
    assert!(
        (american - european).abs() < 3.0 * se,
        "American={:.4}, European={:.4}, SE={:.4}",
        american,
        european,
        se
    );
}

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_longstaff_schwartz_reference_put() {
    // Longstaff & Schwartz (2001), Table 1: S=36, K=40, r=6%, σ=20%, T=1,
    // finite-difference American value 4.478.
    let params = OptionParams {
        spot: 36.0,
        strike: 40.0,
        maturity: 1.0,
        rate: 0.06,
        volatility: 0.2,
        option_type: OptionType::Put,
    };
    let result = price_american(&params, &config(50_000, 50, 2001)).unwrap();
    assert!(
        (result.price - 4.478).abs() < 0.08,
        "LSM={:.4}, SE={:.4}",
        result.price,
        result.std_error
    );
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_deep_otm_put_is_nearly_worthless() {
    let params = OptionParams {
        strike: 20.0,
        option_type: OptionType::Put,
        ..OptionParams::default()
    };
    let result = price_american(&params, &config(5_000, 20, 1)).unwrap();
    assert!(result.price < 1e-3, "price = {}", result.price);
}

#[test]
fn test_zero_volatility_put_exercises_at_first_date() {
    // Deterministic paths drifting up from S=80 with K=100: exercising at
    // the first date beats waiting, and exercise at t=0 itself is never
    // considered.
    let params = OptionParams {
        spot: 80.0,
        volatility: 0.0,
        option_type: OptionType::Put,
        ..OptionParams::default()
    };
    let n_steps = 10;
    let result = price_american(&params, &config(50, n_steps, 1)).unwrap();

    let dt = params.maturity / n_steps as f64;
    let s1 = 80.0 * (params.rate * dt).exp();
    let expected = (100.0 - s1) * (-params.rate * dt).exp();
    assert!(
        (result.price - expected).abs() < 1e-9,
        "price = {}, expected = {}",
        result.price,
        expected
    );
}
