//! Simulate command implementation
//!
//! Generates price (and Heston variance) paths and writes them as nested
//! JSON arrays, one inner array per path including t=0.

use std::path::PathBuf;

use clap::Args;
use pricer_models::models::{ModelKind, ModelParams};
use pricer_pricing::mc::{simulate, CancellationToken, MonteCarloConfig};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Arguments of `mcq simulate`.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Model (gbm, heston, jump-diffusion); defaults to gbm
    #[arg(short, long)]
    pub model: Option<ModelKind>,

    /// JSON file with model parameters, e.g. {"model": "heston", "xi": 0.5}
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Override the initial spot
    #[arg(long)]
    pub spot: Option<f64>,

    /// Override the horizon in years
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Number of paths to write
    #[arg(long = "n-paths", default_value_t = 10)]
    pub n_paths: usize,
}

/// JSON output of `mcq simulate`.
#[derive(Debug, Serialize)]
pub struct SimulationOutput {
    /// Parameters actually simulated.
    pub params: ModelParams,
    /// Seed of the generator handle.
    pub seed: u64,
    /// Paths.
    pub n_paths: usize,
    /// Time steps per path.
    pub n_steps: usize,
    /// Price paths.
    pub prices: Vec<Vec<f64>>,
    /// Variance paths (Heston only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variances: Option<Vec<Vec<f64>>>,
}

fn resolve_params(args: &SimulateArgs) -> Result<ModelParams> {
    let mut params = match &args.params {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            let loaded: ModelParams = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            if let Some(kind) = args.model {
                if kind != loaded.kind() {
                    return Err(CliError::InvalidArgument(format!(
                        "--model {} conflicts with {} parameters in {}",
                        kind,
                        loaded.kind(),
                        path.display()
                    )));
                }
            }
            loaded
        }
        None => ModelParams::default_for(args.model.unwrap_or(ModelKind::Gbm)),
    };

    apply_overrides(&mut params, args.spot, args.maturity);
    Ok(params)
}

fn apply_overrides(params: &mut ModelParams, spot: Option<f64>, maturity: Option<f64>) {
    let (s0, horizon) = match params {
        ModelParams::Gbm(p) => (&mut p.spot, &mut p.maturity),
        ModelParams::Heston(p) => (&mut p.spot, &mut p.maturity),
        ModelParams::JumpDiffusion(p) => (&mut p.spot, &mut p.maturity),
    };
    if let Some(spot) = spot {
        *s0 = spot;
    }
    if let Some(maturity) = maturity {
        *horizon = maturity;
    }
}

/// Simulates paths for the resolved model.
pub fn compute(args: &SimulateArgs, config: &CliConfig) -> Result<SimulationOutput> {
    let params = resolve_params(args)?;
    let mut rng = config.rng();
    let mc_config = MonteCarloConfig::builder()
        .n_paths(args.n_paths)
        .n_steps(config.steps)
        .seed(rng.seed())
        .build()
        .map_err(pricer_core::types::PricingError::from)?;

    info!(model = %params.kind(), paths = args.n_paths, steps = config.steps, seed = rng.seed(), "simulating");
    let simulated = simulate(&params, &mc_config, &mut rng, &CancellationToken::new())?;

    Ok(SimulationOutput {
        params,
        seed: rng.seed(),
        n_paths: simulated.prices.n_paths(),
        n_steps: simulated.prices.n_steps(),
        prices: simulated.prices.rows().map(<[f64]>::to_vec).collect(),
        variances: simulated
            .variances
            .map(|v| v.rows().map(<[f64]>::to_vec).collect()),
    })
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, config: &CliConfig) -> Result<()> {
    print_json(&compute(args, config)?)
}
