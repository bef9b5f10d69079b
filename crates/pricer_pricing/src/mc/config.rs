//! Monte Carlo simulation configuration.
//!
//! This module provides the simulation grid (path count, step count, seed)
//! and its validating builder.

use super::error::ConfigError;
use crate::rng::PricerRng;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Largest full path matrix (`n_paths × (n_steps + 1)` values) a single
/// simulation call will allocate, 800 MB of `f64`.
///
/// Terminal-only European pricing never builds the matrix and is not
/// subject to this cap.
pub const MAX_MATRIX_ENTRIES: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the simulation grid.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Step length `dt = maturity / n_steps`.
    #[inline]
    pub fn dt(&self, maturity: f64) -> f64 {
        maturity / self.n_steps as f64
    }

    /// Same grid with a different path count, used for parallel shards.
    pub fn with_paths(self, n_paths: usize) -> Result<Self, ConfigError> {
        let config = Self { n_paths, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Generator for this configuration: seeded if a seed was given,
    /// otherwise from entropy.
    pub fn rng(&self) -> PricerRng {
        match self.seed {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)  // Daily steps for 1 year
///     .seed(12345)
///     .build()
///     .expect("valid config");
///
/// assert!(MonteCarloConfig::builder().n_paths(10).n_steps(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` or `n_steps` is missing or out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::Missing("n_paths"))?;
        let n_steps = self.n_steps.ok_or(ConfigError::Missing("n_steps"))?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
