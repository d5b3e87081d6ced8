//! Criterion benchmarks for u-binpack.
//!
//! Uses random integer-weight instances (uniform in 20..=100, capacity
//! 150, the shape of the classic Falkenauer "u" sets) to measure the
//! constructors, move enumeration and a fixed-length VNS run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_binpack::approx::{ConstructorKind, NextFit};
use u_binpack::explorer::BinPackingExplorer;
use u_binpack::model::Instance;
use u_binpack::vns::{LocalSearchStrategy, VnsConfig, VnsRunner, VnsVariant};

// ===========================================================================
// Instances
// ===========================================================================

fn uniform_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let items = (0..n).map(|_| rng.random_range(20..=100) as f64).collect();
    Instance::new(150.0, items).expect("valid instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_constructors(c: &mut Criterion) {
    let mut group = c.benchmark_group("constructors");

    for &n in &[120, 250, 500] {
        let instance = uniform_instance(n, 42);
        for kind in ConstructorKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &instance, |b, i| {
                let constructor = kind.build();
                b.iter(|| black_box(constructor.solve(black_box(i))))
            });
        }
    }
    group.finish();
}

fn bench_move_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_enumeration");
    group.sample_size(20);

    for &n in &[120, 250] {
        let explorer = BinPackingExplorer::construct(uniform_instance(n, 42), &NextFit);
        group.bench_with_input(BenchmarkId::from_parameter(n), &explorer, |b, e| {
            b.iter(|| {
                let best = e
                    .possible_moves(false)
                    .map(|mv| e.delta_fitness(&mv))
                    .fold(f64::MIN, f64::max);
                black_box(best)
            })
        });
    }
    group.finish();
}

fn bench_vns(c: &mut Criterion) {
    let mut group = c.benchmark_group("vns");
    group.sample_size(10);

    let variants = [
        VnsVariant::Basic(LocalSearchStrategy::Best),
        VnsVariant::Basic(LocalSearchStrategy::First),
        VnsVariant::Reduced,
    ];

    for &n in &[60, 120] {
        let explorer = BinPackingExplorer::construct(uniform_instance(n, 7), &NextFit);
        for variant in variants {
            let config = VnsConfig::default()
                .with_variant(variant)
                .with_k_max(5)
                .with_max_iterations(20)
                .with_seed(42);
            let label = match variant.strategy() {
                Some(strategy) => format!("{}_{}", variant.name(), strategy.name()),
                None => variant.name().to_owned(),
            };
            group.bench_with_input(
                BenchmarkId::new(label, n),
                &(explorer.clone(), config),
                |b, (e, c)| {
                    b.iter(|| {
                        let result = VnsRunner::run(black_box(e.clone()), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_constructors, bench_move_enumeration, bench_vns);
criterion_main!(benches);
