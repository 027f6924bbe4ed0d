//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs with `Display`
//! implementations suitable for `BenchmarkId::from_parameter`.

use std::fmt;

/// Parameters for a graph-growth benchmark run.
#[derive(Clone, Debug)]
pub struct GrowthBenchParams {
    /// Number of nodes grown.
    pub node_count: usize,
    /// Edges attached from each new node.
    pub attachment: usize,
}

impl fmt::Display for GrowthBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.attachment)
    }
}

/// Parameters for a centrality benchmark run.
#[derive(Clone, Debug)]
pub struct CentralityBenchParams {
    /// Number of nodes scored.
    pub node_count: usize,
}

impl fmt::Display for CentralityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}
