//! Instrument definitions.
//!
//! Only vanilla single-asset options are modelled; exercise style is chosen
//! per pricing call, not stored on the parameter set.

pub mod exercise;
pub mod vanilla;

pub use exercise::{ExerciseStyle, ParseExerciseStyleError};
pub use vanilla::OptionParams;
