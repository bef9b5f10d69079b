//! American option pricing by Longstaff-Schwartz least-squares Monte Carlo.
//!
//! Backward induction over the simulation dates:
//!
//! 1. `V(T) = h(S_T)`.
//! 2. For `t = n_steps − 1` down to `1`:
//!    - discount the next-date value one step, `V(t+1)·df`;
//!    - among in-the-money paths only, regress the discounted value on
//!      `{1, S, S²}` and evaluate the fitted continuation `C(S_t)`;
//!    - an in-the-money path with `h(S_t) > C(S_t)` exercises and takes
//!      `h(S_t)`; every other path keeps the discounted value.
//! 3. Price = `mean(V(1)·df)`.
//!
//! Exercise is never evaluated at `t = 0`; the price is the one-step
//! discounted mean of the date-1 values.
//!
//! The regression uses an SVD least-squares solve, so a rank-deficient
//! design (a single in-the-money path, identical spots) yields the
//! minimum-norm fit rather than an error.

use pricer_core::math::regression::fit_quadratic;
use pricer_core::types::{OptionType, PricingError};
use tracing::{debug, warn};

use super::cancel::CancellationToken;
use super::matrix::PathMatrix;
use super::result::PricingResult;

/// Prices an American option on pre-simulated paths.
///
/// # Arguments
///
/// * `paths` - Simulated price paths over dates `0..=n_steps`
/// * `strike` - Strike price (K)
/// * `option_type` - Call or put
/// * `rate` - Continuously compounded risk-free rate (r)
/// * `maturity` - Time to maturity in years (T)
/// * `cancel` - Checked once per backward step
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if `maturity` is not a positive finite
///   number or `rate` is not finite
/// - `PricingError::Cancelled` if the token fires
///
/// Regression degeneracies are handled internally and never surface.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::{
///     price_american_paths, price_european_paths, simulate_gbm, CancellationToken,
///     MonteCarloConfig,
/// };
/// use pricer_pricing::rng::PricerRng;
///
/// let config = MonteCarloConfig::builder().n_paths(2_000).n_steps(20).build().unwrap();
/// let cancel = CancellationToken::new();
/// let paths = simulate_gbm(&GbmParams::default(), &config, &mut PricerRng::from_seed(7), &cancel)
///     .unwrap();
///
/// let american = price_american_paths(&paths, 100.0, OptionType::Put, 0.05, 1.0, &cancel).unwrap();
/// let european = price_european_paths(&paths, 100.0, OptionType::Put, (-0.05_f64).exp());
/// assert!(american.price >= european.price);
/// ```
pub fn price_american_paths(
    paths: &PathMatrix,
    strike: f64,
    option_type: OptionType,
    rate: f64,
    maturity: f64,
    cancel: &CancellationToken,
) -> Result<PricingResult, PricingError> {
    if !(maturity.is_finite() && maturity > 0.0) {
        return Err(PricingError::invalid(
            "maturity",
            format!("must be positive and finite, got {}", maturity),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::invalid(
            "rate",
            format!("must be finite, got {}", rate),
        ));
    }

    let n_paths = paths.n_paths();
    let n_steps = paths.n_steps();
    let df = (-rate * maturity / n_steps as f64).exp();

    let mut values: Vec<f64> = paths
        .rows()
        .map(|row| option_type.intrinsic(row[n_steps], strike))
        .collect();

    let mut itm_paths: Vec<usize> = Vec::with_capacity(n_paths);
    let mut xs: Vec<f64> = Vec::with_capacity(n_paths);
    let mut ys: Vec<f64> = Vec::with_capacity(n_paths);

    for step in (1..n_steps).rev() {
        cancel.check()?;

        values.iter_mut().for_each(|v| *v *= df);

        itm_paths.clear();
        xs.clear();
        ys.clear();
        for (path, value) in values.iter().enumerate() {
            let spot = paths.get(path, step);
            if option_type.intrinsic(spot, strike) > 0.0 {
                itm_paths.push(path);
                xs.push(spot);
                ys.push(*value);
            }
        }

        if itm_paths.is_empty() {
            continue;
        }

        let fit = fit_quadratic(&xs, &ys);
        if !fit.coefficients.iter().all(|b| b.is_finite()) {
            warn!(step, itm = itm_paths.len(), "non-finite regression fit; continuing all paths");
            continue;
        }
        if fit.is_rank_deficient() {
            debug!(step, rank = fit.rank, itm = itm_paths.len(), "rank-deficient regression");
        }

        let mut exercised = 0_usize;
        for (&path, &spot) in itm_paths.iter().zip(&xs) {
            let exercise_value = option_type.intrinsic(spot, strike);
            if exercise_value > fit.predict(spot) {
                values[path] = exercise_value;
                exercised += 1;
            }
        }
        debug!(step, itm = itm_paths.len(), exercised, "exercise decision");
    }

    values.iter_mut().for_each(|v| *v *= df);
    Ok(PricingResult::from_samples(&values))
}
