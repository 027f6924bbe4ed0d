//! Criterion benchmarks for the centrality engine.
//!
//! Scores scale-free, clustered and uniform workloads of matching size so
//! metric regressions stay visible across degree distributions.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use seedcast_benches::{
    error::BenchSetupError,
    params::CentralityBenchParams,
    workload::{clustered, scale_free, uniform},
};
use seedcast_core::compute_centrality;

/// Seed used for all graph growth in this benchmark.
const SEED: u64 = 42;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[250, 1_000, 4_000];

/// Edges attached from each new node of the growth models.
const ATTACHMENT: usize = 3;

/// Triad-closure probability for the clustered workload.
const CLOSURE_PROBABILITY: f64 = 0.7;

fn centrality_scale_free_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("centrality_ba");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let graph = scale_free(node_count, ATTACHMENT, SEED)?;
        let params = CentralityBenchParams { node_count };

        group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
            b.iter(|| {
                let _metrics = compute_centrality(graph);
            });
        });
    }

    group.finish();
    Ok(())
}

fn centrality_scale_free(c: &mut Criterion) {
    if let Err(err) = centrality_scale_free_impl(c) {
        panic!("centrality_ba benchmark setup failed: {err}");
    }
}

fn centrality_clustered_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("centrality_hk");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let graph = clustered(node_count, ATTACHMENT, CLOSURE_PROBABILITY, SEED)?;
        let params = CentralityBenchParams { node_count };

        group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
            b.iter(|| {
                let _metrics = compute_centrality(graph);
            });
        });
    }

    group.finish();
    Ok(())
}

fn centrality_clustered(c: &mut Criterion) {
    if let Err(err) = centrality_clustered_impl(c) {
        panic!("centrality_hk benchmark setup failed: {err}");
    }
}

fn centrality_uniform_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("centrality_uniform");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let graph = uniform(node_count, node_count.saturating_mul(ATTACHMENT), SEED)?;
        let params = CentralityBenchParams { node_count };

        group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
            b.iter(|| {
                let _metrics = compute_centrality(graph);
            });
        });
    }

    group.finish();
    Ok(())
}

fn centrality_uniform(c: &mut Criterion) {
    if let Err(err) = centrality_uniform_impl(c) {
        panic!("centrality_uniform benchmark setup failed: {err}");
    }
}

criterion_group!(
    benches,
    centrality_scale_free,
    centrality_clustered,
    centrality_uniform
);
criterion_main!(benches);
