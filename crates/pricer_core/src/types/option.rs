//! Option direction.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Direction of a vanilla option.
///
/// Parsed case-insensitively at the boundary so the core only ever sees
/// the two closed variants.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!(OptionType::Put.intrinsic(95.0, 100.0), 5.0);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Intrinsic value of immediate exercise: `max(S - K, 0)` or `max(K - S, 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns true for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an option type string is neither `call` nor `put`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown option type '{0}': expected 'call' or 'put'")]
pub struct ParseOptionTypeError(pub String);

impl FromStr for OptionType {
    type Err = ParseOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(ParseOptionTypeError(s.to_string())),
        }
    }
}
