//! Risk command implementation
//!
//! Reads a single-column CSV of periodic returns (an optional non-numeric
//! header row is skipped) and reports VaR, CVaR, Sharpe and drawdown.

use std::io::Read;
use std::path::Path;

use clap::Args;
use pricer_risk::{risk_metrics, RiskMetricsResult};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::{CliError, Result};

/// Arguments of `mcq risk`.
#[derive(Args, Debug, Clone)]
pub struct RiskArgs {
    /// CSV file with one return per line
    #[arg(long)]
    pub returns: std::path::PathBuf,

    /// Confidence level for VaR and CVaR
    #[arg(long, default_value_t = 0.95)]
    pub confidence: f64,

    /// Risk-free rate per return period
    #[arg(long = "risk-free", default_value_t = 0.0)]
    pub risk_free: f64,
}

/// JSON output of `mcq risk`.
#[derive(Debug, Serialize)]
pub struct RiskReport {
    /// Number of returns read.
    pub n_returns: usize,
    /// Confidence level used.
    pub confidence: f64,
    /// Per-period risk-free rate used.
    pub risk_free_rate: f64,
    /// Computed statistics.
    #[serde(flatten)]
    pub metrics: RiskMetricsResult,
}

/// Parses returns from the first CSV column.
pub fn read_returns_from<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut returns = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let field = match record.get(0) {
            Some(field) if !field.is_empty() => field,
            _ => continue,
        };
        match field.parse::<f64>() {
            Ok(value) => returns.push(value),
            Err(_) if index == 0 => continue,
            Err(_) => {
                return Err(CliError::InvalidArgument(format!(
                    "line {}: '{}' is not a number",
                    index + 1,
                    field
                )))
            }
        }
    }
    Ok(returns)
}

/// Reads returns from a CSV file.
pub fn read_returns(path: &Path) -> Result<Vec<f64>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    read_returns_from(std::fs::File::open(path)?)
}

/// Computes the report for an already-loaded series.
pub fn compute(returns: &[f64], confidence: f64, risk_free_rate: f64) -> Result<RiskReport> {
    let metrics = risk_metrics(returns, confidence, risk_free_rate)?;
    Ok(RiskReport {
        n_returns: returns.len(),
        confidence,
        risk_free_rate,
        metrics,
    })
}

/// Run the risk command
pub fn run(args: &RiskArgs) -> Result<()> {
    let returns = read_returns(&args.returns)?;
    info!(n_returns = returns.len(), file = %args.returns.display(), "loaded returns");
    print_json(&compute(&returns, args.confidence, args.risk_free)?)
}
