//! Option exercise style definitions.

use std::fmt;
use std::str::FromStr;

/// Option exercise style.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any simulation date before expiry
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// let style: ExerciseStyle = "American".parse().unwrap();
/// assert!(style.is_american());
/// assert_eq!(style.to_string(), "american");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    #[default]
    European,
    /// Exercise at any simulation date before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns true for European style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns true for American style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "european",
            ExerciseStyle::American => "american",
        }
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an exercise style name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown exercise style '{0}': expected european or american")]
pub struct ParseExerciseStyleError(pub String);

impl FromStr for ExerciseStyle {
    type Err = ParseExerciseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "european" => Ok(ExerciseStyle::European),
            "american" => Ok(ExerciseStyle::American),
            _ => Err(ParseExerciseStyleError(s.to_string())),
        }
    }
}
