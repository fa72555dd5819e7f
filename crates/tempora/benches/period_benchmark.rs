// Copyright (c) 2026 The tempora authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use tempora::{grid, Period, PeriodSet};

/// Deterministic random periods over a domain wide enough to produce a mix
/// of disjoint, overlapping, and touching pairs.
fn random_periods(count: usize, seed: u64) -> Vec<Period<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..100_000i64);
            let span = rng.gen_range(0..500i64);
            Period::new(start, start + span).unwrap()
        })
        .collect()
}

fn bench_canonical_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_fold");
    for &count in &[64usize, 256, 1024] {
        let periods = random_periods(count, 7);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &periods, |b, ps| {
            b.iter(|| {
                let set: PeriodSet<i64> = ps.iter().copied().collect();
                black_box(set)
            })
        });
    }
    group.finish();
}

fn bench_set_union(c: &mut Criterion) {
    let a: PeriodSet<i64> = random_periods(512, 11).into_iter().collect();
    let b: PeriodSet<i64> = random_periods(512, 13).into_iter().collect();
    c.bench_function("set_union_512x512", |bench| {
        bench.iter(|| black_box(a.union(&b)))
    });
}

fn bench_set_intersection(c: &mut Criterion) {
    let a: PeriodSet<i64> = random_periods(512, 17).into_iter().collect();
    let b: PeriodSet<i64> = random_periods(512, 19).into_iter().collect();
    c.bench_function("set_intersection_512x512", |bench| {
        bench.iter(|| black_box(a.intersection(&b)))
    });
}

fn bench_partition_set(c: &mut Criterion) {
    let set: PeriodSet<i64> = random_periods(512, 23).into_iter().collect();
    c.bench_function("partition_set_512", |bench| {
        bench.iter(|| black_box(grid::partition_set(&set, 3600)))
    });
}

criterion_group!(
    benches,
    bench_canonical_fold,
    bench_set_union,
    bench_set_intersection,
    bench_partition_set
);
criterion_main!(benches);
