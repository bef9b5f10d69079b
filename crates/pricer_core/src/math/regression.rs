//! Least-squares regression on the polynomial basis `{1, x, x²}`.
//!
//! The solve goes through a singular value decomposition rather than the
//! normal equations, so a rank-deficient design matrix (all regressors equal,
//! fewer observations than basis functions) yields the minimum-norm solution
//! instead of an error.
//!
//! # Examples
//!
//! ```
//! use pricer_core::math::regression::fit_quadratic;
//!
//! // Every observation at the same x: rank 1, still solvable.
//! let fit = fit_quadratic(&[2.0, 2.0, 2.0], &[4.0, 4.0, 4.0]);
//! assert_eq!(fit.rank, 1);
//! assert!((fit.predict(2.0) - 4.0).abs() < 1e-10);
//! ```

use nalgebra::{DMatrix, DVector};

/// Number of basis functions in `{1, x, x²}`.
pub const QUADRATIC_BASIS_SIZE: usize = 3;

/// Fitted quadratic `β₀ + β₁x + β₂x²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticFit {
    /// Coefficients `[β₀, β₁, β₂]`.
    pub coefficients: [f64; QUADRATIC_BASIS_SIZE],
    /// Numerical rank of the design matrix.
    pub rank: usize,
}

impl QuadraticFit {
    /// A fit that predicts zero everywhere.
    pub const ZERO: Self = Self {
        coefficients: [0.0; QUADRATIC_BASIS_SIZE],
        rank: 0,
    };

    /// Evaluates the fitted polynomial at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        let [b0, b1, b2] = self.coefficients;
        b0 + x * (b1 + x * b2)
    }

    /// Returns true if the design matrix did not have full column rank.
    #[inline]
    pub fn is_rank_deficient(&self) -> bool {
        self.rank < QUADRATIC_BASIS_SIZE
    }
}

/// Builds the design matrix with rows `[1, x, x²]`.
pub fn quadratic_design(xs: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(xs.len(), QUADRATIC_BASIS_SIZE, |row, col| match col {
        0 => 1.0,
        1 => xs[row],
        _ => xs[row] * xs[row],
    })
}

/// Fits `ys ≈ β₀ + β₁x + β₂x²` by least squares.
///
/// Singular values below `σ_max · max(m, n) · ε` are treated as zero, the
/// same cut-off LAPACK-style pseudo-inverses use. The result minimises the
/// residual sum of squares and, among all minimisers, has the smallest norm.
///
/// # Arguments
///
/// * `xs` - Regressor values
/// * `ys` - Observations, one per regressor
///
/// # Panics
///
/// Panics in debug builds if `xs` and `ys` differ in length.
pub fn fit_quadratic(xs: &[f64], ys: &[f64]) -> QuadraticFit {
    debug_assert_eq!(xs.len(), ys.len());

    if xs.is_empty() {
        return QuadraticFit::ZERO;
    }

    let design = quadratic_design(xs);
    let target = DVector::from_column_slice(ys);
    let n_rows = design.nrows();

    let svd = design.svd(true, true);
    let sigma_max = svd.singular_values.max();
    let eps = sigma_max * (n_rows.max(QUADRATIC_BASIS_SIZE) as f64) * f64::EPSILON;
    let rank = svd.rank(eps);

    match svd.solve(&target, eps) {
        Ok(beta) => QuadraticFit {
            coefficients: [beta[0], beta[1], beta[2]],
            rank,
        },
        // Only reachable if U or V were not computed.
        Err(_) => QuadraticFit::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_exact_quadratic_recovered() {
        let xs: Vec<f64> = (0..20).map(|i| 80.0 + i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 - 0.5 * x + 0.01 * x * x).collect();

        let fit = fit_quadratic(&xs, &ys);

        assert_eq!(fit.rank, 3);
        assert!(!fit.is_rank_deficient());
        assert_relative_eq!(fit.coefficients[0], 3.0, epsilon = 1e-6);
        assert_relative_eq!(fit.coefficients[1], -0.5, epsilon = 1e-7);
        assert_relative_eq!(fit.coefficients[2], 0.01, epsilon = 1e-9);
    }

    #[test]
    fn test_least_squares_residual_orthogonal_to_basis() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ys = [2.1, 3.9, 9.2, 15.8, 25.1, 36.3];

        let fit = fit_quadratic(&xs, &ys);

        // Normal equations hold at the optimum: Xᵀ(y - Xβ) = 0.
        for power in 0..3 {
            let dot: f64 = xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| x.powi(power) * (y - fit.predict(x)))
                .sum();
            assert!(dot.abs() < 1e-8, "power {}: {}", power, dot);
        }
    }

    #[test]
    fn test_identical_regressors_rank_one() {
        let fit = fit_quadratic(&[5.0; 4], &[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(fit.rank, 1);
        assert!(fit.is_rank_deficient());
        // Best constant fit through identical x is the mean.
        assert_relative_eq!(fit.predict(5.0), 2.5, epsilon = 1e-10);
        assert!(fit.coefficients.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_single_observation_least_norm() {
        let fit = fit_quadratic(&[2.0], &[6.0]);

        assert_eq!(fit.rank, 1);
        assert_relative_eq!(fit.predict(2.0), 6.0, epsilon = 1e-10);

        // Least-norm solution is proportional to the row [1, 2, 4].
        let [b0, b1, b2] = fit.coefficients;
        assert_relative_eq!(b1 / b0, 2.0, epsilon = 1e-8);
        assert_relative_eq!(b2 / b0, 4.0, epsilon = 1e-8);
    }

    #[test]
    fn test_two_observations_interpolated() {
        let fit = fit_quadratic(&[1.0, 3.0], &[2.0, 8.0]);

        assert_eq!(fit.rank, 2);
        assert_relative_eq!(fit.predict(1.0), 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.predict(3.0), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_input_zero_fit() {
        let fit = fit_quadratic(&[], &[]);
        assert_eq!(fit, QuadraticFit::ZERO);
        assert_eq!(fit.predict(42.0), 0.0);
    }

    #[test]
    fn test_design_matrix_layout() {
        let design = quadratic_design(&[2.0, 3.0]);
        assert_eq!(design.shape(), (2, 3));
        assert_eq!(design[(0, 0)], 1.0);
        assert_eq!(design[(0, 1)], 2.0);
        assert_eq!(design[(1, 2)], 9.0);
    }

    // ========================================================================
    // Property-based Tests
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_residual_orthogonal_to_basis(
            points in prop::collection::vec((0.5_f64..2.0, -10.0_f64..10.0), 4..40),
        ) {
            let (xs, ys): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
            let fit = fit_quadratic(&xs, &ys);
            prop_assert!(fit.coefficients.iter().all(|c| c.is_finite()));

            // Xᵀ(y − Xβ) = 0, relative to the size of the terms summed.
            for power in 0..3 {
                let (dot, scale) = xs.iter().zip(&ys).fold((0.0, 0.0), |(dot, scale), (&x, &y)| {
                    let basis = x.powi(power);
                    (dot + basis * (y - fit.predict(x)), scale + basis * y.abs().max(1.0))
                });
                prop_assert!(dot.abs() <= 1e-8 * scale, "power {}: {} vs {}", power, dot, scale);
            }
        }

        #[test]
        fn prop_repeated_regressor_gives_least_norm_fit(
            x in 0.5_f64..5.0,
            ys in prop::collection::vec(-10.0_f64..10.0, 3..30),
        ) {
            let xs = vec![x; ys.len()];
            let fit = fit_quadratic(&xs, &ys);
            prop_assert_eq!(fit.rank, 1);

            // Every minimiser reproduces the mean at x; the least-norm one is
            // β = v·mean / |v|² with v = [1, x, x²].
            let mean = ys.iter().sum::<f64>() / ys.len() as f64;
            let v = [1.0, x, x * x];
            let norm_sq: f64 = v.iter().map(|c| c * c).sum();
            for (beta, basis) in fit.coefficients.iter().zip(v) {
                let expected = basis * mean / norm_sq;
                prop_assert!(
                    (beta - expected).abs() <= 1e-9 * (1.0 + mean.abs()),
                    "beta {} vs {}", beta, expected
                );
            }
        }
    }
}
