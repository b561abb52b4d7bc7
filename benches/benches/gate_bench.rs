//! # Gate Benchmarks
//!
//! Measures single-gate throughput and measurement on growing registers.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qnav_core::QuantumState;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn superposed(n: usize) -> QuantumState {
    let mut state = QuantumState::new(n).unwrap();
    state.apply_hadamard_all().unwrap();
    state
}

/// Benchmark each gate on 4..16 qubits
fn bench_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gates");

    for n in [4usize, 8, 12, 16] {
        let state = superposed(n);

        group.bench_with_input(BenchmarkId::new("hadamard", n), &state, |b, s| {
            let mut s = s.clone();
            b.iter(|| s.apply_hadamard(black_box(n / 2)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("pauli_x", n), &state, |b, s| {
            let mut s = s.clone();
            b.iter(|| s.apply_pauli_x(black_box(n / 2)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("phase", n), &state, |b, s| {
            let mut s = s.clone();
            b.iter(|| s.apply_phase(black_box(n / 2), black_box(0.3)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("controlled_not", n), &state, |b, s| {
            let mut s = s.clone();
            b.iter(|| s.apply_controlled_not(black_box(0), black_box(n - 1)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark sampling and collapse
fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [4usize, 10, 16] {
        let state = superposed(n);

        group.bench_with_input(BenchmarkId::new("sample", n), &state, |b, s| {
            b.iter(|| black_box(s.sample(&mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("measure", n), &state, |b, s| {
            b.iter(|| {
                let mut s = s.clone();
                black_box(s.measure(0, &mut rng).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gates, bench_measurement);
criterion_main!(benches);
