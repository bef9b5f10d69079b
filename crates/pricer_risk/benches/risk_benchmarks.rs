//! Criterion benchmarks for pricer_risk statistics.
//!
//! Benchmarks cover:
//! - VaR/CVaR/Sharpe/drawdown over growing return series
//! - Portfolio risk simulation with varying asset counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_pricing::mc::{CancellationToken, MonteCarloConfig};
use pricer_pricing::rng::PricerRng;
use pricer_risk::metrics::risk_metrics;
use pricer_risk::portfolio::{portfolio_risk, Asset};

/// Generate a synthetic daily return series.
fn generate_returns(n: usize) -> Vec<f64> {
    let mut rng = PricerRng::from_seed(42);
    (0..n).map(|_| 0.0004 + 0.012 * rng.gen_normal()).collect()
}

/// Benchmark the combined return-series statistics.
fn bench_risk_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_metrics");

    for n in [1_000, 10_000, 100_000] {
        let returns = generate_returns(n);
        group.bench_with_input(BenchmarkId::new("series", n), &returns, |b, r| {
            b.iter(|| risk_metrics(black_box(r), 0.95, 0.0002).unwrap());
        });
    }

    group.finish();
}

/// Benchmark portfolio simulation with increasing asset counts.
fn bench_portfolio_risk(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_risk");
    group.sample_size(10);

    let config = MonteCarloConfig::builder()
        .n_paths(1_000)
        .n_steps(252)
        .build()
        .unwrap();
    let cancel = CancellationToken::new();
    let rng = PricerRng::from_seed(7);

    for n_assets in [1, 4, 16] {
        let assets: Vec<Asset> = (0..n_assets)
            .map(|i| Asset {
                spot: 50.0 + 10.0 * i as f64,
                volatility: 0.15 + 0.01 * i as f64,
                weight: 1.0,
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("assets", n_assets), &assets, |b, a| {
            b.iter(|| portfolio_risk(a, 0.05, 1.0, &config, &rng, &cancel).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_risk_metrics, bench_portfolio_risk);
criterion_main!(benches);
