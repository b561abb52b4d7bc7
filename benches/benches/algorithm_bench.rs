//! # Algorithm Benchmarks
//!
//! Measures amplitude search, phase estimation, variational optimization and
//! annealing, plus the navigation engine entry points.
//!
//! Run: `cargo bench --bench algorithm_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qnav_algorithms::{Annealer, AmplitudeSearch, PhaseEstimator, VariationalOptimizer};
use qnav_navigation::{cost_table, NavigationConfig, NavigationEngine, Point};

/// Benchmark amplitude search over growing spaces
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("amplitude_search");

    for n in [3usize, 6, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut search = AmplitudeSearch::new(n, [1]).unwrap();
            b.iter(|| black_box(search.search().unwrap()))
        });
    }

    group.finish();
}

/// Benchmark phase estimation
fn bench_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_estimation");

    for n in [4usize, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut qpe = PhaseEstimator::new(n).unwrap();
            b.iter(|| black_box(qpe.estimate(black_box(0.77)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark variational optimization and annealing
fn bench_optimizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizers");
    let weights = cost_table(64);

    group.bench_function("variational_6q_30it", |b| {
        let mut opt = VariationalOptimizer::seeded(6, 1).unwrap();
        b.iter(|| black_box(opt.optimize(&weights, 30).unwrap()))
    });

    group.bench_function("anneal_8bit_100steps", |b| {
        let mut annealer = Annealer::seeded(8, 1).unwrap();
        b.iter(|| black_box(annealer.anneal(|s| (s as f64 * 0.1).sin(), 100)))
    });

    group.finish();
}

/// Benchmark the navigation engine
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation_engine");
    let mut engine = NavigationEngine::seeded(NavigationConfig::default(), 7).unwrap();
    let hazards = [Point::new(0.1, 0.1), Point::new(-0.05, 0.2)];

    group.bench_function("score_avoidance", |b| {
        b.iter(|| black_box(engine.score_avoidance(&hazards, Point::new(0.0, 0.0)).unwrap()))
    });

    group.bench_function("forecast_environment_4q", |b| {
        b.iter(|| black_box(engine.forecast_environment(4).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_phase, bench_optimizers, bench_engine);
criterion_main!(benches);
