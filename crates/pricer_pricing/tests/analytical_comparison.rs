//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the Black-Scholes
//! closed form.
//!
//! # Test Categories
//!
//! 1. **Reference scenario**: S=K=100, T=1, r=5%, σ=20%
//! 2. **Convergence**: error stays within a few standard errors as paths grow
//! 3. **Models**: Heston and jump-diffusion degenerate to Black-Scholes

use pricer_core::types::OptionType;
use pricer_models::analytical::price_black_scholes;
use pricer_models::instruments::OptionParams;
use pricer_models::models::{HestonParams, JumpDiffusionParams};
use pricer_pricing::engine::price_european;
use pricer_pricing::mc::{
    price_european_paths, simulate_heston, simulate_jump_diffusion, CancellationToken,
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

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_call_analytical() {
    let price = price_black_scholes(&OptionParams::default()).unwrap();
    assert!((price - 10.4506).abs() < 1e-4, "BS price = {}", price);
}

#[test]
fn test_reference_call_mc_200k_paths() {
    let params = OptionParams::default();
    let analytical = price_black_scholes(&params).unwrap();

    // GBM stepping is exact, so one step suffices for a European payoff.
    let result = price_european(&params, &config(200_000, 1, 42)).unwrap();
    let error = (result.price - analytical).abs();

    // The ±0.05 band is about 1.5 standard errors at this path count.
    assert!(result.std_error < 0.05, "std_error = {}", result.std_error);
    assert!(
        error < 4.0 * result.std_error,
        "MC={:.4}, Analytical={:.4}, Error={:.4}, SE={:.4}",
        result.price,
        analytical,
        error,
        result.std_error
    );
}

#[test]
fn test_reference_call_mc_within_five_cents() {
    let params = OptionParams::default();
    let analytical = price_black_scholes(&params).unwrap();

    let result = price_european(&params, &config(1_000_000, 1, 7)).unwrap();
    assert!(
        (result.price - analytical).abs() < 0.05,
        "MC={:.4}, Analytical={:.4}",
        result.price,
        analytical
    );
}

#[test]
fn test_put_mc_vs_analytical_multi_step() {
    let params = OptionParams {
        strike: 110.0,
        option_type: OptionType::Put,
        ..OptionParams::default()
    };
    let analytical = price_black_scholes(&params).unwrap();
    let result = price_european(&params, &config(100_000, 50, 11)).unwrap();

    assert!(
        (result.price - analytical).abs() < 4.0 * result.std_error,
        "MC={:.4}, Analytical={:.4}, SE={:.4}",
        result.price,
        analytical,
        result.std_error
    );
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_convergence_10k_to_1m() {
    let params = OptionParams::default();
    let analytical = price_black_scholes(&params).unwrap();

    let small = price_european(&params, &config(10_000, 1, 2024)).unwrap();
    let large = price_european(&params, &config(1_000_000, 1, 2025)).unwrap();

    // The standard error shrinks like 1/√n.
    let ratio = small.std_error / large.std_error;
    assert!((ratio - 10.0).abs() < 1.0, "SE ratio = {}", ratio);

    // Neither estimate strays beyond ~3x its naive standard error (4 for margin).
    assert!((small.price - analytical).abs() < 4.0 * small.std_error);
    assert!((large.price - analytical).abs() < 4.0 * large.std_error);
    assert!((large.price - small.price).abs() < 4.0 * small.std_error);
}

// ============================================================================
// Model Degeneration Tests
// ============================================================================

#[test]
fn test_heston_constant_variance_matches_black_scholes() {
    // v0 = θ and ξ = 0 keeps variance at σ² forever.
    let params = OptionParams::default();
    let heston = HestonParams {
        v0: 0.04,
        theta: 0.04,
        xi: 0.0,
        ..HestonParams::default()
    };
    let (paths, variances) = simulate_heston(
        &heston,
        &config(100_000, 10, 5),
        &mut PricerRng::from_seed(5),
        &CancellationToken::new(),
    )
    .unwrap();
    assert!(variances.as_slice().iter().all(|&v| (v - 0.04).abs() < 1e-15));

    let result =
        price_european_paths(&paths, params.strike, params.option_type, params.discount_factor());
    let analytical = price_black_scholes(&params).unwrap();
    assert!(
        (result.price - analytical).abs() < 4.0 * result.std_error,
        "MC={:.4}, Analytical={:.4}",
        result.price,
        analytical
    );
}

#[test]
fn test_jump_diffusion_zero_intensity_matches_black_scholes() {
    let params = OptionParams::default();
    let jd = JumpDiffusionParams {
        jump_intensity: 0.0,
        drift: params.rate,
        volatility: params.volatility,
        ..JumpDiffusionParams::default()
    };
    let paths = simulate_jump_diffusion(
        &jd,
        &config(100_000, 4, 13),
        &mut PricerRng::from_seed(13),
        &CancellationToken::new(),
    )
    .unwrap();

    let result =
        price_european_paths(&paths, params.strike, params.option_type, params.discount_factor());
    let analytical = price_black_scholes(&params).unwrap();
    assert!((result.price - analytical).abs() < 4.0 * result.std_error);
}
