//! Simulated path storage.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial value. One path is a contiguous
//! slice, so payoffs and per-path statistics read sequential memory.

use super::config::MAX_MATRIX_ENTRIES;
use super::error::ConfigError;

/// Matrix of `n_paths` simulated paths over `n_steps + 1` dates.
///
/// Always holds at least one path and one step.
///
/// Produced fresh by every simulation call and never mutated afterwards
/// outside this crate.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::{simulate_gbm, CancellationToken, MonteCarloConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let config = MonteCarloConfig::builder().n_paths(4).n_steps(10).build().unwrap();
/// let paths = simulate_gbm(
///     &GbmParams::default(),
///     &config,
///     &mut PricerRng::from_seed(1),
///     &CancellationToken::new(),
/// )
/// .unwrap();
///
/// assert_eq!(paths.n_paths(), 4);
/// assert_eq!(paths.path(0).len(), 11);
/// assert_eq!(paths.get(3, 0), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

/// Per-path, per-date instantaneous variance (Heston only).
///
/// Same layout as [`PathMatrix`]; every entry is non-negative.
pub type VarianceMatrix = PathMatrix;

impl PathMatrix {
    /// Number of `f64` values a matrix of this shape holds, or `None` on
    /// overflow.
    #[inline]
    fn len_for(n_paths: usize, n_steps: usize) -> Option<usize> {
        n_steps.checked_add(1)?.checked_mul(n_paths)
    }

    /// Allocates a matrix with every path starting at `initial`.
    ///
    /// Entries after date 0 are zero until written.
    ///
    /// # Errors
    ///
    /// `ConfigError::MatrixTooLarge` if the matrix would exceed
    /// [`MAX_MATRIX_ENTRIES`] values; nothing is allocated in that case.
    pub(crate) fn with_initial(
        n_paths: usize,
        n_steps: usize,
        initial: f64,
    ) -> Result<Self, ConfigError> {
        let n_points = n_steps.saturating_add(1);
        let len = Self::len_for(n_paths, n_steps)
            .filter(|&len| len <= MAX_MATRIX_ENTRIES)
            .ok_or(ConfigError::MatrixTooLarge { n_paths, n_points })?;

        let mut data = vec![0.0; len];
        for row in data.chunks_exact_mut(n_points) {
            row[0] = initial;
        }
        Ok(Self {
            data,
            n_paths,
            n_steps,
        })
    }

    /// Builds a matrix from row-major data.
    ///
    /// Returns `None` if `n_paths` or `n_steps` is zero, or if
    /// `data.len() != n_paths * (n_steps + 1)`.
    pub fn from_rows(data: Vec<f64>, n_paths: usize, n_steps: usize) -> Option<Self> {
        if n_paths == 0 || n_steps == 0 {
            return None;
        }
        (Self::len_for(n_paths, n_steps)? == data.len()).then_some(Self {
            data,
            n_paths,
            n_steps,
        })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps (one less than the number of dates).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of dates per path, `n_steps + 1`.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_steps + 1
    }

    /// Value of path `path` at date `step`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, path: usize, step: usize) -> f64 {
        assert!(step <= self.n_steps, "step {} out of range", step);
        self.data[path * self.n_points() + step]
    }

    #[inline]
    pub(crate) fn set(&mut self, path: usize, step: usize, value: f64) {
        let n_points = self.n_points();
        self.data[path * n_points + step] = value;
    }

    /// All dates of one path.
    #[inline]
    pub fn path(&self, path: usize) -> &[f64] {
        let n_points = self.n_points();
        &self.data[path * n_points..(path + 1) * n_points]
    }

    /// Iterator over paths.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_points())
    }

    /// Values of every path at date `step`.
    pub fn column(&self, step: usize) -> Vec<f64> {
        self.rows().map(|row| row[step]).collect()
    }

    /// Values of every path at the final date.
    pub fn terminal(&self) -> Vec<f64> {
        self.column(self.n_steps)
    }

    /// Mean across paths at every date.
    pub fn mean_path(&self) -> Vec<f64> {
        let mut mean = vec![0.0; self.n_points()];
        for row in self.rows() {
            for (acc, value) in mean.iter_mut().zip(row) {
                *acc += value;
            }
        }
        let n = self.n_paths as f64;
        mean.iter_mut().for_each(|acc| *acc /= n);
        mean
    }

    /// Smallest entry in the matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
