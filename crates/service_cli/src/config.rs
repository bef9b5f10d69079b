//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables,
//! and command-line flags.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`MCQ_PATHS`, `MCQ_STEPS`, `MCQ_SEED`,
//!    `MCQ_WORKERS`, `MCQ_LOG_LEVEL`)
//! 3. Config file (`mcq.toml` by default, optional)
//! 4. Default values
//!
//! ```toml
//! paths = 200000
//! steps = 252
//! seed = 42
//! workers = 8
//! log_level = "info"
//! ```

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::PricingError;
use pricer_pricing::mc::{MonteCarloConfig, MAX_PATHS, MAX_STEPS};
use pricer_pricing::parallel::ParallelConfig;
use pricer_pricing::rng::PricerRng;
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "mcq.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A value could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// Raw value.
        value: String,
    },

    /// A count lies outside its allowed range.
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Setting name.
        key: &'static str,
        /// Supplied value.
        value: usize,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },

    /// The config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-step detail.
    Trace,
    /// Layout and regression statistics.
    Debug,
    /// Progress messages.
    Info,
    /// Degenerate regressions and worker failures.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Monte Carlo and logging settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Total Monte Carlo paths for pricing.
    pub paths: usize,
    /// Time steps per path.
    pub steps: usize,
    /// Master seed; a fresh one is drawn per run when absent.
    pub seed: Option<u64>,
    /// Worker threads; all available cores when absent.
    pub workers: Option<usize>,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            paths: 100_000,
            steps: 252,
            seed: None,
            workers: None,
            log_level: LogLevel::Warn,
        }
    }
}

/// Command-line overrides; `None` leaves the configured value untouched.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--paths`
    pub paths: Option<usize>,
    /// `--steps`
    pub steps: Option<usize>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--workers`
    pub workers: Option<usize>,
    /// `--log-level`
    pub log_level: Option<LogLevel>,
}

fn parse_env<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn ensure_range(key: &'static str, value: usize, min: usize, max: usize) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}

impl CliConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `MCQ_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("MCQ_PATHS") {
            self.paths = parse_env("MCQ_PATHS", &raw)?;
        }
        if let Some(raw) = lookup("MCQ_STEPS") {
            self.steps = parse_env("MCQ_STEPS", &raw)?;
        }
        if let Some(raw) = lookup("MCQ_SEED") {
            self.seed = Some(parse_env("MCQ_SEED", &raw)?);
        }
        if let Some(raw) = lookup("MCQ_WORKERS") {
            self.workers = Some(parse_env("MCQ_WORKERS", &raw)?);
        }
        if let Some(raw) = lookup("MCQ_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&raw)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(paths) = cli.paths {
            self.paths = paths;
        }
        if let Some(steps) = cli.steps {
            self.steps = steps;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(workers) = cli.workers {
            self.workers = Some(workers);
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_range("paths", self.paths, 1, MAX_PATHS)?;
        ensure_range("steps", self.steps, 1, MAX_STEPS)?;
        if let Some(workers) = self.workers {
            ensure_range("workers", workers, 1, usize::MAX)?;
        }
        Ok(())
    }

    /// Monte Carlo settings for `n_paths` paths with the configured steps and seed.
    pub fn monte_carlo(&self, n_paths: usize) -> Result<MonteCarloConfig, PricingError> {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(self.steps)
            .maybe_seed(self.seed)
            .build()?;
        Ok(config)
    }

    /// Parallel layout with the configured worker count and master seed.
    pub fn parallel(&self) -> Result<ParallelConfig, PricingError> {
        let master_seed = self.master_seed();
        let parallel = match self.workers {
            Some(workers) => ParallelConfig::new(workers, master_seed)?,
            None => ParallelConfig::with_available_parallelism(master_seed),
        };
        Ok(parallel)
    }

    /// Seeded generator handle; drawn from entropy when no seed is configured.
    pub fn rng(&self) -> PricerRng {
        PricerRng::from_seed(self.master_seed())
    }

    fn master_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| PricerRng::from_entropy().seed())
    }
}

/// Build configuration from all sources
///
/// An explicit `config_file` must exist; the default file is optional.
pub fn build_config(
    config_file: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(overrides);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.paths, 100_000);
        assert_eq!(config.steps, 252);
        assert_eq!(config.seed, None);
        assert_eq!(config.workers, None);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml_str("paths = 5000\nseed = 7\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.paths, 5000);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.steps, 252);
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        let err = CliConfig::from_toml_str("pathz = 10").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = CliConfig::from_toml_str("paths = 5000\nsteps = 10").unwrap();
        config
            .apply_env_with(env(&[("MCQ_PATHS", "2000"), ("MCQ_WORKERS", " 3 ")]))
            .unwrap();
        assert_eq!(config.paths, 2000);
        assert_eq!(config.steps, 10);
        assert_eq!(config.workers, Some(3));
    }

    #[test]
    fn test_env_invalid_value_named() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env_with(env(&[("MCQ_SEED", "abc")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for MCQ_SEED: abc");
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(env(&[("MCQ_STEPS", "50"), ("MCQ_LOG_LEVEL", "info")]))
            .unwrap();
        config.merge_with_cli(&CliOverrides {
            steps: Some(12),
            ..CliOverrides::default()
        });
        assert_eq!(config.steps, 12);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_validate_ranges() {
        let zero_steps = CliConfig {
            steps: 0,
            ..CliConfig::default()
        };
        assert!(matches!(
            zero_steps.validate(),
            Err(ConfigError::OutOfRange { key: "steps", .. })
        ));

        let zero_workers = CliConfig {
            workers: Some(0),
            ..CliConfig::default()
        };
        assert!(zero_workers.validate().is_err());

        let too_many = CliConfig {
            paths: MAX_PATHS + 1,
            ..CliConfig::default()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = CliConfig {
            seed: Some(99),
            workers: Some(2),
            ..CliConfig::default()
        };
        assert_eq!(config.parallel().unwrap().master_seed(), 99);
        assert_eq!(config.parallel().unwrap().workers(), 2);
        assert_eq!(config.rng().seed(), 99);
        assert_eq!(config.monte_carlo(10).unwrap().seed(), Some(99));
    }
}
