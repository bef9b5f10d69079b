//! mcq - Monte Carlo option pricing and risk from the command line
//!
//! # Commands
//!
//! - `mcq price` - Black-Scholes and Monte Carlo (European/American) prices
//! - `mcq greeks` - Black-Scholes Greeks
//! - `mcq simulate --model <gbm|heston|jump-diffusion>` - Simulated paths
//! - `mcq risk --returns <csv>` - VaR, CVaR, Sharpe and maximum drawdown
//! - `mcq portfolio --file <json>` - Simulated portfolio risk
//!
//! Results are written to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::PriceStyle;
use commands::risk::RiskArgs;
use commands::simulate::SimulateArgs;
use commands::OptionArgs;
use config::{build_config, CliOverrides, LogLevel};

/// Monte Carlo option pricing and risk analysis
#[derive(Parser)]
#[command(name = "mcq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML); mcq.toml is used when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Total Monte Carlo paths
    #[arg(long, global = true)]
    paths: Option<usize>,

    /// Time steps per path
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Master random seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Worker threads
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a vanilla option
    Price {
        #[command(flatten)]
        option: OptionArgs,

        /// Pricing method
        #[arg(long, value_enum, default_value_t = PriceStyle::European)]
        style: PriceStyle,
    },

    /// Compute Black-Scholes Greeks
    Greeks {
        #[command(flatten)]
        option: OptionArgs,
    },

    /// Simulate price paths
    Simulate(SimulateArgs),

    /// Compute risk statistics of a return series
    Risk(RiskArgs),

    /// Simulate a weighted portfolio and report its risk
    Portfolio {
        /// Portfolio definition (JSON)
        #[arg(short, long)]
        file: PathBuf,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            paths: self.paths,
            steps: self.steps,
            seed: self.seed,
            workers: self.workers,
            log_level: self.log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref(), &cli.overrides())
        .context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        paths = config.paths,
        steps = config.steps,
        seed = ?config.seed,
        workers = ?config.workers,
        "configuration loaded"
    );

    let (name, outcome) = match &cli.command {
        Commands::Price { option, style } => {
            ("price", commands::price::run(option, *style, &config))
        }
        Commands::Greeks { option } => ("greeks", commands::greeks::run(option)),
        Commands::Simulate(args) => ("simulate", commands::simulate::run(args, &config)),
        Commands::Risk(args) => ("risk", commands::risk::run(args)),
        Commands::Portfolio { file } => ("portfolio", commands::portfolio::run(file, &config)),
    };

    outcome.with_context(|| format!("mcq {} failed", name))
}
