//! Path generation for Monte Carlo simulation.
//!
//! This module implements the three path simulators:
//! - GBM: exact log-space stepping
//! - Heston: Euler discretisation of the variance with full truncation at zero
//! - Merton jump-diffusion: GBM plus compound Poisson jumps in the log-price
//!
//! Each time step draws the shocks for every path at once into a reusable
//! buffer, then advances every path. Draws are independent across paths and
//! steps. The cancellation token is checked once per step.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `paths[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price. Full matrices are
//! capped at [`MAX_MATRIX_ENTRIES`](crate::mc::MAX_MATRIX_ENTRIES) values;
//! [`simulate_gbm_terminal`] keeps only the current date and has no cap.

use pricer_core::types::PricingError;
use pricer_models::models::{GbmParams, HestonParams, JumpDiffusionParams, ModelParams};
use tracing::debug;

use super::cancel::CancellationToken;
use super::config::MonteCarloConfig;
use super::matrix::{PathMatrix, VarianceMatrix};
use crate::rng::PricerRng;

/// Output of [`simulate`]: prices, plus variances for Heston.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPaths {
    /// Simulated asset prices.
    pub prices: PathMatrix,
    /// Simulated instantaneous variance, present for Heston only.
    pub variances: Option<VarianceMatrix>,
}

/// Simulates GBM paths.
///
/// S(t+dt) = S(t) · exp((μ − σ²/2)dt + σ√dt · Z)
///
/// # Errors
///
/// `PricingError::InvalidParameter` for invalid model parameters,
/// `PricingError::Cancelled` if the token fires.
pub fn simulate_gbm(
    params: &GbmParams,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
    cancel: &CancellationToken,
) -> Result<PathMatrix, PricingError> {
    params.validate()?;
    config.validate()?;

    let (n_paths, n_steps) = (config.n_paths(), config.n_steps());
    let (drift_dt, vol_sqrt_dt) = params.step_coefficients(config.dt(params.maturity));

    let mut paths = PathMatrix::with_initial(n_paths, n_steps, params.spot)?;
    let mut shocks = vec![0.0; n_paths];

    for step in 1..=n_steps {
        cancel.check()?;
        rng.fill_normal(&mut shocks);
        for (path, z) in shocks.iter().enumerate() {
            let prev = paths.get(path, step - 1);
            paths.set(path, step, prev * (drift_dt + vol_sqrt_dt * z).exp());
        }
    }

    debug!(n_paths, n_steps, seed = rng.seed(), "simulated GBM paths");
    Ok(paths)
}

/// Simulates GBM paths keeping only the current value of each path.
///
/// Consumes the generator exactly as [`simulate_gbm`] does, so the result
/// equals the terminal column of `simulate_gbm` for the same generator state,
/// while memory stays `O(n_paths)` whatever the step count.
///
/// # Errors
///
/// As for [`simulate_gbm`], without the matrix size limit.
pub fn simulate_gbm_terminal(
    params: &GbmParams,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
    cancel: &CancellationToken,
) -> Result<Vec<f64>, PricingError> {
    params.validate()?;
    config.validate()?;

    let (n_paths, n_steps) = (config.n_paths(), config.n_steps());
    let (drift_dt, vol_sqrt_dt) = params.step_coefficients(config.dt(params.maturity));

    let mut spots = vec![params.spot; n_paths];
    let mut shocks = vec![0.0; n_paths];

    for _ in 0..n_steps {
        cancel.check()?;
        rng.fill_normal(&mut shocks);
        for (spot, z) in spots.iter_mut().zip(&shocks) {
            *spot *= (drift_dt + vol_sqrt_dt * z).exp();
        }
    }

    debug!(n_paths, n_steps, seed = rng.seed(), "simulated GBM terminal values");
    Ok(spots)
}

/// Simulates Heston price and variance paths.
///
/// Two correlated normals per path and step, `Z₂ = ρZ₁ + √(1−ρ²)Z₂′`.
/// The variance update is truncated at zero, and the truncated value is the
/// one used in the next step's `√(v·dt)` term:
///
/// ```text
/// S_t = S_{t−1} · exp((r − v_{t−1}/2)dt + √(v_{t−1}dt) · Z₁)
/// v_t = max(v_{t−1} + κ(θ − v_{t−1})dt + ξ√(v_{t−1}dt) · Z₂, 0)
/// ```
pub fn simulate_heston(
    params: &HestonParams,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
    cancel: &CancellationToken,
) -> Result<(PathMatrix, VarianceMatrix), PricingError> {
    params.validate()?;
    config.validate()?;

    let (n_paths, n_steps) = (config.n_paths(), config.n_steps());
    let dt = config.dt(params.maturity);
    let rho_bar = params.rho_complement();

    let mut prices = PathMatrix::with_initial(n_paths, n_steps, params.spot)?;
    let mut variances = VarianceMatrix::with_initial(n_paths, n_steps, params.v0)?;
    let mut z1 = vec![0.0; n_paths];
    let mut z2 = vec![0.0; n_paths];

    for step in 1..=n_steps {
        cancel.check()?;
        rng.fill_normal(&mut z1);
        rng.fill_normal(&mut z2);

        for path in 0..n_paths {
            let v_prev = variances.get(path, step - 1);
            let s_prev = prices.get(path, step - 1);
            let vol_dt = (v_prev * dt).sqrt();
            let w2 = params.rho * z1[path] + rho_bar * z2[path];

            let log_return = (params.rate - 0.5 * v_prev) * dt + vol_dt * z1[path];
            prices.set(path, step, s_prev * log_return.exp());

            let v_next = v_prev + params.kappa * (params.theta - v_prev) * dt + params.xi * vol_dt * w2;
            variances.set(path, step, v_next.max(0.0));
        }
    }

    debug!(
        n_paths,
        n_steps,
        feller = params.satisfies_feller(),
        "simulated Heston paths"
    );
    Ok((prices, variances))
}

/// Simulates Merton jump-diffusion paths.
///
/// Each step draws a Poisson(λ·dt) arrival count per path. A path with `n`
/// arrivals receives the log-jump `n·μ_J + σ_J·√n · Z`, which has the law of
/// a sum of `n` independent `N(μ_J, σ_J²)` jumps; zero arrivals add nothing.
/// With λ = 0 no jump randomness is drawn, so the output equals
/// [`simulate_gbm`] for the same generator state.
pub fn simulate_jump_diffusion(
    params: &JumpDiffusionParams,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
    cancel: &CancellationToken,
) -> Result<PathMatrix, PricingError> {
    params.validate()?;
    config.validate()?;

    let (n_paths, n_steps) = (config.n_paths(), config.n_steps());
    let dt = config.dt(params.maturity);
    let (drift_dt, vol_sqrt_dt) = params.diffusion().step_coefficients(dt);
    let mean_jumps = params.jumps_per_step(dt);
    let has_jumps = mean_jumps > 0.0;

    let mut paths = PathMatrix::with_initial(n_paths, n_steps, params.spot)?;
    let mut shocks = vec![0.0; n_paths];
    let mut counts = vec![0_u64; n_paths];
    let mut jump_shocks = vec![0.0; n_paths];

    for step in 1..=n_steps {
        cancel.check()?;
        rng.fill_normal(&mut shocks);
        if has_jumps {
            rng.fill_poisson(mean_jumps, &mut counts);
            rng.fill_normal(&mut jump_shocks);
        }

        for path in 0..n_paths {
            let jump = match counts[path] {
                0 => 0.0,
                n => {
                    let n = n as f64;
                    n * params.jump_mean + params.jump_volatility * n.sqrt() * jump_shocks[path]
                }
            };
            let prev = paths.get(path, step - 1);
            let log_return = drift_dt + vol_sqrt_dt * shocks[path] + jump;
            paths.set(path, step, prev * log_return.exp());
        }
    }

    debug!(n_paths, n_steps, mean_jumps, "simulated jump-diffusion paths");
    Ok(paths)
}

/// Simulates paths for any supported model.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::{HestonParams, ModelParams};
/// use pricer_pricing::mc::{simulate, CancellationToken, MonteCarloConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let config = MonteCarloConfig::builder().n_paths(100).n_steps(50).build().unwrap();
/// let out = simulate(
///     &ModelParams::Heston(HestonParams::default()),
///     &config,
///     &mut PricerRng::from_seed(3),
///     &CancellationToken::new(),
/// )
/// .unwrap();
///
/// let variances = out.variances.unwrap();
/// assert!(variances.min_value() >= 0.0);
/// ```
pub fn simulate(
    model: &ModelParams,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
    cancel: &CancellationToken,
) -> Result<SimulatedPaths, PricingError> {
    match model {
        ModelParams::Gbm(p) => Ok(SimulatedPaths {
            prices: simulate_gbm(p, config, rng, cancel)?,
            variances: None,
        }),
        ModelParams::Heston(p) => {
            let (prices, variances) = simulate_heston(p, config, rng, cancel)?;
            Ok(SimulatedPaths {
                prices,
                variances: Some(variances),
            })
        }
        ModelParams::JumpDiffusion(p) => Ok(SimulatedPaths {
            prices: simulate_jump_diffusion(p, config, rng, cancel)?,
            variances: None,
        }),
    }
}
