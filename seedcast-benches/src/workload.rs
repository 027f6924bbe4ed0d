//! Deterministic graph workloads shared by the benchmark harnesses.
//!
//! Every builder threads an explicit seed so run-to-run timings compare
//! the same topology. The uniform builder exists as a degree-distribution
//! baseline against the scale-free growth models.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use seedcast_core::{BarabasiAlbert, Graph, HolmeKim, NodeId};

use crate::error::BenchSetupError;

/// Grows a Barabási–Albert graph sized for benchmarking.
///
/// # Errors
/// Returns [`BenchSetupError::Growth`] when the model parameters are
/// rejected.
pub fn scale_free(nodes: usize, attachment: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    Ok(BarabasiAlbert::new(nodes, attachment)?
        .with_rng_seed(seed)
        .generate())
}

/// Grows a Holme–Kim graph with the given triad-closure probability.
///
/// # Errors
/// Returns [`BenchSetupError::Growth`] when the model parameters are
/// rejected.
pub fn clustered(
    nodes: usize,
    attachment: usize,
    closure_probability: f64,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    Ok(HolmeKim::new(nodes, attachment, closure_probability)?
        .with_rng_seed(seed)
        .generate())
}

/// Builds a uniform random simple graph with an exact edge budget.
///
/// Endpoint pairs are rejection-sampled, so the budget should stay well
/// below the complete-graph capacity for the loop to finish quickly.
///
/// # Errors
/// Returns [`BenchSetupError::EdgeBudget`] when `edges` exceeds the
/// capacity of a simple graph over `nodes` nodes.
pub fn uniform(nodes: usize, edges: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    #[expect(
        clippy::integer_division,
        reason = "Triangular capacity n*(n-1)/2 is an exact integer"
    )]
    let capacity = nodes.saturating_mul(nodes.saturating_sub(1)) / 2;
    if edges > capacity {
        return Err(BenchSetupError::EdgeBudget { nodes, edges });
    }

    let mut graph = Graph::with_node_count(nodes);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut placed = 0_usize;
    while placed < edges {
        let source = NodeId::new(rng.gen_range(0..nodes));
        let target = NodeId::new(rng.gen_range(0..nodes));
        // Endpoints are in range, so the only outcomes are inserted or
        // skipped as a self-loop or duplicate.
        if matches!(graph.add_edge(source, target), Ok(true)) {
            placed += 1;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::sparse(20, 30)]
    #[case::single(2, 1)]
    #[case::empty_budget(5, 0)]
    fn uniform_places_the_exact_edge_budget(#[case] nodes: usize, #[case] edges: usize) {
        let graph = uniform(nodes, edges, 7).expect("budget should fit the capacity");
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), edges);
    }

    #[rstest]
    fn uniform_rejects_oversized_budgets() {
        let err = uniform(3, 4, 7).expect_err("budget exceeds a three-node capacity");
        assert!(matches!(
            err,
            BenchSetupError::EdgeBudget { nodes: 3, edges: 4 }
        ));
    }

    #[rstest]
    fn workloads_are_deterministic_per_seed() {
        let first = uniform(30, 60, 11).expect("budget should fit the capacity");
        let second = uniform(30, 60, 11).expect("budget should fit the capacity");
        assert_eq!(first.edges(), second.edges());

        let grown_a = scale_free(40, 2, 5).expect("parameters should be valid");
        let grown_b = scale_free(40, 2, 5).expect("parameters should be valid");
        assert_eq!(grown_a.edges(), grown_b.edges());
    }

    #[rstest]
    fn clustered_matches_scale_free_edge_budget() {
        let triads = clustered(30, 3, 0.8, 9).expect("parameters should be valid");
        let plain = scale_free(30, 3, 9).expect("parameters should be valid");
        assert_eq!(triads.edge_count(), plain.edge_count());
    }
}
