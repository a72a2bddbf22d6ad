//! Benchmarks for the skip list and priority queue.
//!
//! Compares against `BTreeMap` and `BinaryHeap` from std.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use tile_collections::{Natural, PriorityQueue, SkipList};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..1_000_000)).collect()
}

// ============================================================================
// Skip list
// ============================================================================

fn bench_skiplist_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_insert");

    for size in SIZES {
        let values = random_values(size, 1);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tile_skiplist", size), &values, |b, values| {
            b.iter(|| {
                let mut list: SkipList<u64, _, _> =
                    SkipList::new(Natural, SmallRng::seed_from_u64(12345));
                for &v in values {
                    list.insert(black_box(v));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("std_btreemap", size), &values, |b, values| {
            b.iter(|| {
                let mut map: BTreeMap<u64, usize> = BTreeMap::new();
                for &v in values {
                    *map.entry(black_box(v)).or_default() += 1;
                }
                map
            });
        });
    }

    group.finish();
}

fn bench_skiplist_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_search");

    for size in SIZES {
        let values = random_values(size, 2);
        let probes = random_values(1_000, 3);
        let list: SkipList<u64, _, _> = SkipList::from_values(
            values.iter().copied(),
            Natural,
            SmallRng::seed_from_u64(12345),
        );

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("tile_skiplist", size), &probes, |b, probes| {
            b.iter(|| probes.iter().filter(|p| list.contains(black_box(*p))).count());
        });
    }

    group.finish();
}

// ============================================================================
// Priority queue
// ============================================================================

fn bench_queue_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_push_pop");

    for size in SIZES {
        let values = random_values(size, 4);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tile_unbounded", size), &values, |b, values| {
            b.iter(|| {
                let mut pq = PriorityQueue::unbounded(Natural);
                for &v in values {
                    pq.enqueue(black_box(v)).unwrap();
                }
                while let Ok(v) = pq.dequeue() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("tile_bounded", size), &values, |b, values| {
            b.iter(|| {
                let mut pq = PriorityQueue::bounded(values.len(), Natural);
                for &v in values {
                    pq.enqueue(black_box(v)).unwrap();
                }
                while let Ok(v) = pq.dequeue() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(64);
                for &v in values {
                    heap.push(Reverse(black_box(v)));
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_skiplist_insert,
    bench_skiplist_search,
    bench_queue_push_pop
);
criterion_main!(benches);
