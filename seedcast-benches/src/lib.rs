//! Benchmark support crate for seedcast.
//!
//! Provides deterministic graph workloads and parameter types used by the
//! Criterion benchmarks for graph growth and centrality scoring.

pub mod error;
pub mod params;
pub mod workload;
