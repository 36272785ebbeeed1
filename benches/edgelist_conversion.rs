//! Benchmarks for edge list conversion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edgelist::{edgelist_to_adjacency, edgelist_to_biadjacency};

/// Deterministic pseudo-random edges (linear congruential generator)
fn generate_edges(n_nodes: u32, n_edges: usize) -> Vec<(u32, u32, f64)> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) as u32
    };

    (0..n_edges)
        .map(|_| {
            let src = next() % n_nodes;
            let dst = next() % n_nodes;
            (src, dst, (next() % 100) as f64 / 10.0)
        })
        .collect()
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edgelist_conversion");

    for &(n_nodes, n_edges) in &[(100u32, 1_000usize), (10_000, 100_000)] {
        let weighted = generate_edges(n_nodes, n_edges);
        let unweighted: Vec<(u32, u32)> = weighted.iter().map(|&(r, c, _)| (r, c)).collect();

        group.bench_with_input(
            BenchmarkId::new("adjacency", n_edges),
            &unweighted,
            |b, edges| b.iter(|| edgelist_to_adjacency(black_box(edges), false)),
        );

        group.bench_with_input(
            BenchmarkId::new("adjacency_undirected", n_edges),
            &weighted,
            |b, edges| b.iter(|| edgelist_to_adjacency(black_box(edges), true)),
        );

        group.bench_with_input(
            BenchmarkId::new("biadjacency", n_edges),
            &weighted,
            |b, edges| b.iter(|| edgelist_to_biadjacency(black_box(edges))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
