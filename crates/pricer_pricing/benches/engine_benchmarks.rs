//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - Batched normal generation
//! - Path simulation per model (GBM, Heston, jump-diffusion)
//! - European vs Longstaff-Schwartz American pricing on shared paths
//! - Parallel fan-out scaling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::OptionType;
use pricer_models::instruments::{ExerciseStyle, OptionParams};
use pricer_models::models::{GbmParams, HestonParams, JumpDiffusionParams, ModelParams};
use pricer_pricing::engine::price_parallel;
use pricer_pricing::mc::{
    price_american_paths, price_european_paths, simulate, simulate_gbm, CancellationToken,
    MonteCarloConfig,
};
use pricer_pricing::parallel::ParallelConfig;
use pricer_pricing::rng::PricerRng;

fn config(n_paths: usize, n_steps: usize) -> MonteCarloConfig {
    MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(42)
        .build()
        .unwrap()
}

/// Benchmark batched normal generation.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark path simulation for each model.
fn bench_path_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_simulation");
    group.sample_size(30);

    let models = [
        ("gbm", ModelParams::Gbm(GbmParams::default())),
        ("heston", ModelParams::Heston(HestonParams::default())),
        (
            "jump_diffusion",
            ModelParams::JumpDiffusion(JumpDiffusionParams::default()),
        ),
    ];
    let cancel = CancellationToken::new();
    let grid = config(10_000, 50);

    for (name, model) in models {
        group.bench_function(BenchmarkId::new(name, 10_000), |b| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| simulate(black_box(&model), &grid, &mut rng, &cancel).unwrap());
        });
    }

    group.finish();
}

/// Benchmark European vs American pricing on the same paths.
fn bench_pricers(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricers");
    group.sample_size(20);

    let cancel = CancellationToken::new();
    let params = OptionParams::default().with_option_type(OptionType::Put);

    for n_paths in [1_000, 10_000, 50_000] {
        let paths = simulate_gbm(
            &params.risk_neutral_gbm(),
            &config(n_paths, 50),
            &mut PricerRng::from_seed(7),
            &cancel,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("european", n_paths), &paths, |b, p| {
            b.iter(|| {
                price_european_paths(p, params.strike, params.option_type, params.discount_factor())
            });
        });

        group.bench_with_input(BenchmarkId::new("american_lsm", n_paths), &paths, |b, p| {
            b.iter(|| {
                price_american_paths(
                    p,
                    params.strike,
                    params.option_type,
                    params.rate,
                    params.maturity,
                    &cancel,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark parallel scaling with worker count.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_european");
    group.sample_size(20);

    let params = OptionParams::default();
    let grid = config(100_000, 50);
    let cancel = CancellationToken::new();

    for workers in [1, 2, 4, 8] {
        let parallel = ParallelConfig::new(workers, 42).unwrap();
        group.bench_with_input(BenchmarkId::new("workers", workers), &parallel, |b, p| {
            b.iter(|| {
                price_parallel(&params, ExerciseStyle::European, &grid, p, &cancel).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_path_simulation,
    bench_pricers,
    bench_parallel
);
criterion_main!(benches);
