//! Criterion benchmarks for the genetic TSP solver.
//!
//! Uses synthetic ring instances (known optimum: the angular order) to
//! measure whole-run cost and per-operator overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_evolve::model::{City, Instance};
use tsp_evolve::tour::cycle_length;
use tsp_evolve::{Solver, SolverConfig};

fn ring_instance(n: usize) -> Instance {
    let cities: Vec<City> = (0..n)
        .map(|i| {
            let angle = (i as f64) * std::f64::consts::TAU / (n as f64);
            City::new(format!("v{i}"), angle.cos() * 100.0, angle.sin() * 100.0)
        })
        .collect();
    Instance::new(cities).expect("valid instance")
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_ring");
    group.sample_size(10);

    for &n in &[10usize, 25, 50] {
        let instance = ring_instance(n);
        let config = SolverConfig::default()
            .with_seed(42)
            .with_stagnation_limit(20);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(instance, config), |b, (i, cfg)| {
            b.iter(|| {
                let result = Solver::run(black_box(i), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_cycle_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_length");

    for &n in &[50usize, 200, 1000] {
        let instance = ring_instance(n);
        let order: Vec<usize> = (0..n).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, order),
            |b, (i, order)| {
                b.iter(|| black_box(cycle_length(black_box(order), i.matrix())))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solver, bench_cycle_length);
criterion_main!(benches);
