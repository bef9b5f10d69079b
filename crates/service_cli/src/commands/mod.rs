//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Every command writes a
//! single JSON document to stdout; logs go to stderr.

use clap::Args;
use pricer_core::types::{OptionType, PricingError};
use pricer_models::instruments::OptionParams;
use serde::Serialize;

use crate::Result;

pub mod greeks;
pub mod portfolio;
pub mod price;
pub mod risk;
pub mod simulate;

/// Contract and market inputs shared by `price` and `greeks`.
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Spot price
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.05)]
    pub rate: f64,

    /// Volatility
    #[arg(long, default_value_t = 0.2)]
    pub vol: f64,

    /// Option type (call or put, case-insensitive)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

impl OptionArgs {
    /// Validated option parameters.
    pub fn to_params(&self) -> Result<OptionParams> {
        let params = OptionParams::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.vol,
            self.option_type,
        )
        .map_err(PricingError::from)?;
        Ok(params)
    }
}

/// Writes `value` to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
