//! Eigenvector centrality by power iteration on the undirected adjacency.

use crate::graph::Graph;

/// Convergence threshold on the L1 change between iterations.
const TOLERANCE: f64 = 1e-6;
/// Iteration cap when convergence is slow.
const MAX_ITERATIONS: usize = 100;

/// Principal-eigenvector scores, non-negative with the maximum rescaled
/// to 1. An edgeless graph scores all zeroes.
pub(super) fn power_iteration_scores(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    if graph.edge_count() == 0 {
        return vec![0.0; n];
    }

    let mut scores = vec![1.0 / (n as f64).sqrt(); n];
    let mut next = vec![0.0; n];
    for _ in 0..MAX_ITERATIONS {
        // Iterate with A + I: bipartite components would oscillate under
        // plain A, and the shift leaves the principal eigenvector intact.
        next.copy_from_slice(&scores);
        for node in graph.nodes() {
            let score = scores[node.id.index()];
            for &neighbour in graph.neighbours(node.id) {
                next[neighbour.index()] += score;
            }
        }
        let norm = next.iter().map(|value| value * value).sum::<f64>().sqrt();
        if norm == 0.0 {
            break;
        }
        for value in &mut next {
            *value /= norm;
        }
        let change: f64 = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);
        if change < TOLERANCE {
            break;
        }
    }

    let max = scores.iter().fold(0.0_f64, |acc, &value| acc.max(value));
    if max > 0.0 {
        for value in &mut scores {
            *value /= max;
        }
    }
    scores
}
