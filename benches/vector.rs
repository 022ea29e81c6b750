//! Benchmarks for Vector against Vec, and across growth policies.
//!
//! Run with: `cargo bench --bench vector`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growvec::{GrowthPolicy, Vector};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size {
                    vec.append(black_box(i as u64));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u64>::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth_policy");
    let size = 5_000;

    let policies = [
        ("doubling", GrowthPolicy::doubling()),
        ("factor_3_2", GrowthPolicy::factor(3, 2)),
        ("fixed_64", GrowthPolicy::fixed(64)),
    ];
    for (name, policy) in policies {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut vec = Vector::with_policy(policy.clone());
                for i in 0..size {
                    vec.append(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    group.bench_function("Vector_1000", |b| {
        b.iter(|| {
            let mut vec = Vector::new();
            for i in 0..1_000u64 {
                vec.insert(0, black_box(i)).unwrap();
            }
            black_box(vec);
        });
    });

    group.bench_function("Vec_1000", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..1_000u64 {
                vec.insert(0, black_box(i));
            }
            black_box(vec);
        });
    });

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let vec: Vector<u64> = (0..10_000).collect();

    c.bench_function("iter_sum_10000", |b| {
        b.iter(|| black_box(vec.iter().sum::<u64>()));
    });

    c.bench_function("cursor_walk_10000", |b| {
        b.iter(|| {
            let mut total = 0u64;
            let mut it = vec.begin();
            let end = vec.end();
            while it != end {
                if let Some(value) = it.get() {
                    total += *value;
                }
                it.pre_increment();
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_policies,
    bench_insert_front,
    bench_iterate
);
criterion_main!(benches);
