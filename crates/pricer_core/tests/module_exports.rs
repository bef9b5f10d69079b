//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the regression module is accessible via absolute path.
#[test]
fn test_regression_module_exports() {
    use pricer_core::math::regression::{fit_quadratic, QuadraticFit};

    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 + x * x).collect();
    let fit: QuadraticFit = fit_quadratic(&xs, &ys);
    assert!((fit.predict(5.0) - 27.0).abs() < 1e-9);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::option::OptionType;

    let err = PricingError::invalid("spot", "must be positive");
    assert!(err.is_invalid_parameter());
    assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
}

/// Test re-exports at the types module root.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{OptionType, ParseOptionTypeError, PricingError};

    let parsed: Result<OptionType, ParseOptionTypeError> = "CALL".parse();
    assert_eq!(parsed.unwrap(), OptionType::Call);
    assert!("forward".parse::<OptionType>().is_err());
    let _ = PricingError::Cancelled;
}
