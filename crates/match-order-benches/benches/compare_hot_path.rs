// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: single `compare` calls across pattern arities.
//!
//! Arity 2..8 stays in the inline sort buffer; 16 and 32 spill to the heap.
//! Each iteration compares a fixed pair chosen so the cascade runs to stage 4
//! (worst case: same rule, same multiset, different binding order).
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use match_order::{compare, ElementId, Match, RuleId};
use match_order_benches::{random_matches, FixtureRng};
use std::time::Duration;

fn permuted_pair(arity: usize) -> (Match, Match) {
    let forward: Vec<ElementId> = (0..arity as u64).map(ElementId::from_raw).collect();
    let mut backward = forward.clone();
    backward.reverse();
    (
        Match::new(RuleId::from_raw(0), forward),
        Match::new(RuleId::from_raw(0), backward),
    )
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_worst_case");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5));
    for &arity in &[2usize, 4, 8, 16, 32] {
        let (a, b) = permuted_pair(arity);
        group.bench_with_input(BenchmarkId::from_parameter(arity), &arity, |bench, _| {
            bench.iter(|| compare(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

fn bench_sort_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_batch");
    for &n in &[64usize, 1_024, 16_384] {
        let mut rng = FixtureRng::new(0x5eed);
        let batch = random_matches(&mut rng, n, 3, (n as u64) * 2, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |bench, batch| {
            bench.iter_batched(
                || batch.clone(),
                |mut v| {
                    match_order::order::sort_matches(&mut v);
                    v
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compare, bench_sort_batch);
criterion_main!(benches);
