// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use queens_count::store::pack::PackIter;
use queens_count::store::symmetry::QNoSymmetry;
use queens_count::{count_solutions_sized, Cfg};

struct BenchCfg;

impl Cfg for BenchCfg {}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count solutions");
    group.sample_size(10);

    for threads in [1usize, 4] {
        group.bench_with_input(BenchmarkId::new("N=10", threads), &threads, |b, &t| {
            b.iter(|| {
                black_box(count_solutions_sized::<10, 5, BenchCfg, QNoSymmetry, PackIter>(
                    t, 0, 1,
                ))
            })
        });
        group.bench_with_input(BenchmarkId::new("N=12", threads), &threads, |b, &t| {
            b.iter(|| {
                black_box(count_solutions_sized::<12, 6, BenchCfg, QNoSymmetry, PackIter>(
                    t, 0, 1,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count);
criterion_main!(benches);
