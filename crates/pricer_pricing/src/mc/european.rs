//! European option pricing from simulated paths.

use pricer_core::types::{OptionType, PricingError};

use super::error::ConfigError;
use super::matrix::PathMatrix;
use super::result::PricingResult;

/// Prices a European option from the terminal column of `paths`.
///
/// price = discount · mean(payoff(S_T))
///
/// # Arguments
///
/// * `paths` - Simulated price paths
/// * `strike` - Strike price (K)
/// * `option_type` - Call or put
/// * `discount` - Discount factor to maturity, `e^(−rT)`
pub fn price_european_paths(
    paths: &PathMatrix,
    strike: f64,
    option_type: OptionType,
    discount: f64,
) -> PricingResult {
    let n_steps = paths.n_steps();
    discounted_payoffs(
        paths.rows().map(|row| row[n_steps]),
        strike,
        option_type,
        discount,
    )
}

/// Prices a European option from terminal values alone, one `S_T` per path.
///
/// # Errors
///
/// `PricingError::InvalidParameter` if `terminal` is empty.
pub fn price_european_terminal(
    terminal: &[f64],
    strike: f64,
    option_type: OptionType,
    discount: f64,
) -> Result<PricingResult, PricingError> {
    if terminal.is_empty() {
        return Err(ConfigError::InvalidPathCount(0).into());
    }
    Ok(discounted_payoffs(
        terminal.iter().copied(),
        strike,
        option_type,
        discount,
    ))
}

fn discounted_payoffs(
    terminal: impl Iterator<Item = f64>,
    strike: f64,
    option_type: OptionType,
    discount: f64,
) -> PricingResult {
    let discounted: Vec<f64> = terminal
        .map(|s| discount * option_type.intrinsic(s, strike))
        .collect();
    PricingResult::from_samples(&discounted)
}
