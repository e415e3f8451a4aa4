//! Criterion benchmarks for whole-field evolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drift::Scheme;
use drift_bench::{reference_profile, stress_profile};

/// Benchmark: 100 sub-steps of each scheme on the 1024-point reference profile.
fn bench_reference_100_steps(c: &mut Criterion) {
    for scheme in Scheme::ALL {
        let base = reference_profile();
        c.bench_function(&format!("reference_{scheme}_100"), |b| {
            b.iter(|| {
                let mut field = base.clone();
                let out = field.evolve(scheme, 100);
                black_box(out);
            });
        });
    }
}

/// Benchmark: a single sub-step of each scheme on the 1M-point stress profile.
fn bench_stress_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    for scheme in Scheme::ALL {
        let mut field = stress_profile(7);
        group.bench_function(format!("{scheme}_1"), |b| {
            b.iter(|| {
                let out = field.evolve(scheme, 1);
                black_box(out);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reference_100_steps, bench_stress_single_step);
criterion_main!(benches);
