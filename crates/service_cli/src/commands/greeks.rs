//! Greeks command implementation

use pricer_models::analytical::{greeks, Greeks};

use super::{print_json, OptionArgs};
use crate::Result;

/// Black-Scholes Greeks for the given contract.
pub fn compute(args: &OptionArgs) -> Result<Greeks<f64>> {
    Ok(greeks(&args.to_params()?)?)
}

/// Run the greeks command
pub fn run(args: &OptionArgs) -> Result<()> {
    print_json(&compute(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    #[test]
    fn test_reference_call_greeks() {
        let args = OptionArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            vol: 0.2,
            option_type: OptionType::Call,
        };
        let g = compute(&args).unwrap();
        assert_relative_eq!(g.delta, 0.636831, epsilon = 1e-5);
        assert_relative_eq!(g.vega, 37.5245, epsilon = 1e-3);

        let json = serde_json::to_value(g).unwrap();
        for key in ["delta", "gamma", "theta", "vega", "rho"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
