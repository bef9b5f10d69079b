//! Vanilla option pricing entry points.
//!
//! Every function validates its inputs before anything is simulated, so an
//! invalid request fails with `PricingError::InvalidParameter` naming the
//! violated constraint.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::OptionParams;
//! use pricer_pricing::engine::{price_american, price_european};
//! use pricer_pricing::mc::MonteCarloConfig;
//!
//! let params = OptionParams::default();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let european = price_european(&params, &config).unwrap();
//! assert!((european.price - 10.4506).abs() < 4.0 * european.std_error);
//!
//! let american = price_american(&params, &config).unwrap();
//! assert!(american.price > 0.0);
//! ```

use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, OptionParams};
use tracing::debug;

use crate::mc::{
    price_american_paths, price_european_terminal, simulate_gbm, simulate_gbm_terminal,
    CancellationToken, MonteCarloConfig, PricingResult,
};
use crate::parallel::{run_parallel, ParallelConfig};
use crate::rng::PricerRng;

/// Prices a vanilla option on freshly simulated risk-neutral GBM paths.
///
/// The building block behind every other function in this module; also the
/// kernel each parallel worker runs on its shard.
///
/// The European style steps terminal values only and needs `O(n_paths)`
/// memory. The American style needs the full path matrix, so requests above
/// [`MAX_MATRIX_ENTRIES`](crate::mc::MAX_MATRIX_ENTRIES) values fail with
/// `PricingError::InvalidParameter`.
pub fn price_vanilla(
    params: &OptionParams,
    style: ExerciseStyle,
    config: &MonteCarloConfig,
    rng: &mut PricerRng,
    cancel: &CancellationToken,
) -> Result<PricingResult, PricingError> {
    params.validate()?;

    let gbm = params.risk_neutral_gbm();
    let result = match style {
        ExerciseStyle::European => {
            let terminal = simulate_gbm_terminal(&gbm, config, rng, cancel)?;
            price_european_terminal(
                &terminal,
                params.strike,
                params.option_type,
                params.discount_factor(),
            )
        }
        ExerciseStyle::American => {
            let paths = simulate_gbm(&gbm, config, rng, cancel)?;
            price_american_paths(
                &paths,
                params.strike,
                params.option_type,
                params.rate,
                params.maturity,
                cancel,
            )
        }
    }?;

    debug!(
        %style,
        option_type = %params.option_type,
        price = result.price,
        std_error = result.std_error,
        "priced vanilla option"
    );
    Ok(result)
}

/// European price from `config.n_paths()` paths on the calling thread.
///
/// Uses the configured seed, or entropy if none is set.
pub fn price_european(
    params: &OptionParams,
    config: &MonteCarloConfig,
) -> Result<PricingResult, PricingError> {
    price_vanilla(
        params,
        ExerciseStyle::European,
        config,
        &mut config.rng(),
        &CancellationToken::new(),
    )
}

/// Longstaff-Schwartz American price on the calling thread.
pub fn price_american(
    params: &OptionParams,
    config: &MonteCarloConfig,
) -> Result<PricingResult, PricingError> {
    price_vanilla(
        params,
        ExerciseStyle::American,
        config,
        &mut config.rng(),
        &CancellationToken::new(),
    )
}

/// Prices across workers, splitting `config.n_paths()` into equal shards.
///
/// For the American style each shard runs its own backward induction, and
/// the shard prices are averaged.
///
/// # Errors
///
/// Parameter errors are reported before any worker starts.
pub fn price_parallel(
    params: &OptionParams,
    style: ExerciseStyle,
    config: &MonteCarloConfig,
    parallel: &ParallelConfig,
    cancel: &CancellationToken,
) -> Result<PricingResult, PricingError> {
    params.validate()?;
    config.validate()?;

    let shard_size = parallel.plan(config.n_paths()).shard_size;
    let shard_config = config.with_paths(shard_size)?;

    run_parallel(
        |ctx| price_vanilla(params, style, &shard_config, &mut ctx.rng, &ctx.cancel),
        config.n_paths(),
        parallel,
        cancel,
    )
}
