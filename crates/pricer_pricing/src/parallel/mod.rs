//! Rayon-based fan-out of Monte Carlo pricing kernels.
//!
//! A request for `total_paths` is split into equal shards, one per worker.
//! Each worker runs the same kernel on its shard with its own generator
//! derived from the master seed, and the shard estimates are combined by
//! unweighted mean. Workers share no mutable state; the only
//! synchronisation is the join at the end.
//!
//! Failure policy: if any worker returns an error or panics, the request
//! fails and no partial result is produced.
//!
//! # Examples
//!
//! ```rust
//! use pricer_pricing::mc::PricingResult;
//! use pricer_pricing::mc::CancellationToken;
//! use pricer_pricing::parallel::{run_parallel, ParallelConfig};
//!
//! let config = ParallelConfig::new(4, 42).unwrap();
//! let result = run_parallel(
//!     |ctx| {
//!         let samples: Vec<f64> = (0..ctx.n_paths).map(|_| ctx.rng.gen_uniform()).collect();
//!         Ok(PricingResult::from_samples(&samples))
//!     },
//!     10_000,
//!     &config,
//!     &CancellationToken::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.n_paths, 10_000);
//! assert!((result.price - 0.5).abs() < 0.02);
//! ```

use std::panic::{self, AssertUnwindSafe};

use pricer_core::types::PricingError;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::mc::{CancellationToken, ConfigError, PricingResult};
use crate::rng::PricerRng;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    workers: usize,
    master_seed: u64,
}

impl ParallelConfig {
    /// Creates a configuration with an explicit worker count.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidWorkerCount` if `workers` is zero.
    pub fn new(workers: usize, master_seed: u64) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::InvalidWorkerCount(workers));
        }
        Ok(Self {
            workers,
            master_seed,
        })
    }

    /// One worker per available CPU.
    pub fn with_available_parallelism(master_seed: u64) -> Self {
        Self {
            workers: num_cpus::get().max(1),
            master_seed,
        }
    }

    /// Configured worker count.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Seed every worker stream derives from.
    #[inline]
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Splits `total_paths` into equal shards.
    ///
    /// The worker count is clamped to `total_paths` and every shard has
    /// `ceil(total_paths / workers)` paths, so at least `total_paths` are
    /// simulated.
    pub fn plan(&self, total_paths: usize) -> ShardPlan {
        let workers = self.workers.min(total_paths).max(1);
        ShardPlan {
            workers,
            shard_size: total_paths.div_ceil(workers),
        }
    }
}

/// How a request is divided among workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShardPlan {
    /// Number of workers that run.
    pub workers: usize,
    /// Paths per worker.
    pub shard_size: usize,
}

impl ShardPlan {
    /// Total paths simulated across all shards.
    #[inline]
    pub fn total_paths(&self) -> usize {
        self.workers * self.shard_size
    }
}

/// Per-worker state handed to the kernel.
#[derive(Debug)]
pub struct WorkerContext {
    /// Worker index in `0..workers`.
    pub index: usize,
    /// Paths this worker must simulate.
    pub n_paths: usize,
    /// Generator private to this worker.
    pub rng: PricerRng,
    /// Request-wide cancellation token.
    pub cancel: CancellationToken,
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}

fn run_worker<K>(kernel: &K, mut ctx: WorkerContext) -> Result<PricingResult, PricingError>
where
    K: Fn(&mut WorkerContext) -> Result<PricingResult, PricingError> + Sync,
{
    let index = ctx.index;
    ctx.cancel.check()?;

    match panic::catch_unwind(AssertUnwindSafe(|| kernel(&mut ctx))) {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(PricingError::Cancelled)) => Err(PricingError::Cancelled),
        Ok(Err(err)) => {
            warn!(worker = index, error = %err, "worker failed");
            Err(PricingError::WorkerFailure {
                worker: index,
                reason: err.to_string(),
            })
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            warn!(worker = index, %reason, "worker panicked");
            Err(PricingError::WorkerFailure {
                worker: index,
                reason,
            })
        }
    }
}

/// Combines equal-sized shard estimates.
///
/// Price is the unweighted mean; the standard error is that of a mean of
/// independent estimates, `√(Σ seᵢ²) / N`.
pub fn aggregate(shards: &[PricingResult]) -> PricingResult {
    let n = shards.len() as f64;
    let price = shards.iter().map(|r| r.price).sum::<f64>() / n;
    let variance_sum: f64 = shards.iter().map(|r| r.std_error * r.std_error).sum();
    PricingResult {
        price,
        std_error: variance_sum.sqrt() / n,
        n_paths: shards.iter().map(|r| r.n_paths).sum(),
    }
}

/// Runs `kernel` on equal shards of `total_paths` and averages the results.
///
/// Worker `i` receives `PricerRng::from_seed(master_seed).derive(i)`, so the
/// outcome is reproducible for a given configuration and does not depend on
/// scheduling order.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if `total_paths` is zero
/// - `PricingError::Cancelled` if the token fires
/// - `PricingError::WorkerFailure` for the first failing or panicking worker
pub fn run_parallel<K>(
    kernel: K,
    total_paths: usize,
    config: &ParallelConfig,
    cancel: &CancellationToken,
) -> Result<PricingResult, PricingError>
where
    K: Fn(&mut WorkerContext) -> Result<PricingResult, PricingError> + Sync,
{
    if total_paths == 0 {
        return Err(ConfigError::InvalidPathCount(total_paths).into());
    }

    let plan = config.plan(total_paths);
    let master = PricerRng::from_seed(config.master_seed());
    debug!(
        workers = plan.workers,
        shard_size = plan.shard_size,
        master_seed = config.master_seed(),
        "parallel fan-out"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(plan.workers)
        .build()
        .map_err(|err| PricingError::WorkerFailure {
            worker: 0,
            reason: format!("thread pool: {}", err),
        })?;

    let shards: Vec<PricingResult> = pool.install(|| {
        (0..plan.workers)
            .into_par_iter()
            .map(|index| {
                let ctx = WorkerContext {
                    index,
                    n_paths: plan.shard_size,
                    rng: master.derive(index),
                    cancel: cancel.clone(),
                };
                run_worker(&kernel, ctx)
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    Ok(aggregate(&shards))
}
