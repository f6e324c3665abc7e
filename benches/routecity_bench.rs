// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for queue churn, network generation and path finding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use routecity::prelude::*;

fn names(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("N{i}")).collect()
}

fn generated(size: usize) -> Network {
    let mut network = Network::new();
    network
        .create_network(&names(size), &mut StdRng::seed_from_u64(17))
        .unwrap();
    network
}

fn bench_queue(c: &mut Criterion) {
    c.bench_function("queue_add_pop_1000", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new(Order::MinFirst);
            for v in 0..1000u32 {
                queue.add(v.wrapping_mul(2_654_435_761) % 10_007);
            }
            while let Ok(v) = queue.pop() {
                black_box(v);
            }
        });
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(generated(size)));
        });
    }
    group.finish();
}

fn bench_quickest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("quickest_path");
    for size in [10, 100, 1000] {
        let network = generated(size);
        let end = format!("N{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(network.find_quickest_path("N0", &end, false).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queue, bench_generate, bench_quickest_path);
criterion_main!(benches);
