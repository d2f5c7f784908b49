//! Benchmarks for equilibrium solving.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use litigation_solver::game::{
    find_mixed_equilibrium, find_pure_equilibria, PayoffMatrix, SolverConfig,
};

/// A 10x10 game with staggered payoffs (no randomness, stable results).
fn large_matrix() -> PayoffMatrix {
    let n = 10;
    let p1: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| ((i * 7 + j * 3) % 11) as f64).collect())
        .collect();
    let p2: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| ((i * 5 + j * 9) % 13) as f64).collect())
        .collect();
    PayoffMatrix::build(p1, p2).unwrap()
}

fn rock_paper_scissors() -> PayoffMatrix {
    let p1 = vec![
        vec![0.0, -1.0, 1.0],
        vec![1.0, 0.0, -1.0],
        vec![-1.0, 1.0, 0.0],
    ];
    let p2 = p1
        .iter()
        .map(|row| row.iter().map(|v| -v).collect())
        .collect();
    PayoffMatrix::build(p1, p2).unwrap()
}

fn pure_scan_benchmark(c: &mut Criterion) {
    let matrix = large_matrix();

    c.bench_function("pure_scan_10x10", |b| {
        b.iter(|| find_pure_equilibria(black_box(&matrix)))
    });
}

fn support_enumeration_benchmark(c: &mut Criterion) {
    let matrix = rock_paper_scissors();
    let config = SolverConfig::default();

    c.bench_function("support_enumeration_3x3", |b| {
        b.iter(|| find_mixed_equilibrium(black_box(&matrix), &config))
    });
}

criterion_group!(benches, pure_scan_benchmark, support_enumeration_benchmark);
criterion_main!(benches);
