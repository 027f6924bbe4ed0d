//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark
//! workloads so that setup functions can propagate them with `?` instead
//! of panicking.

use seedcast_core::SeedcastError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Growth-model validation or generation failed.
    #[error("graph growth failed: {0}")]
    Growth(#[from] SeedcastError),
    /// More edges were requested than a simple graph can hold.
    #[error("cannot place {edges} edges in a simple graph over {nodes} nodes")]
    EdgeBudget {
        /// Number of nodes available.
        nodes: usize,
        /// Requested edge budget.
        edges: usize,
    },
}
