//! PageRank on the directed view.

use super::DirectedView;

/// Random-surfer damping factor.
const DAMPING: f64 = 0.85;
/// Convergence threshold on the L1 residual between iterations.
const TOLERANCE: f64 = 1e-6;
/// Iteration cap when convergence is slow.
const MAX_ITERATIONS: usize = 100;

/// PageRank scores summing to 1 for graphs of two or more nodes.
///
/// Dangling mass is redistributed uniformly each iteration, so the
/// invariant `sum == 1` holds even when nodes have no outgoing edges. A
/// singleton graph scores `0.0`, consistent with every other metric on an
/// isolated node.
pub(super) fn damped_scores(view: &DirectedView) -> Vec<f64> {
    let n = view.node_count();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0.0];
    }

    let count = n as f64;
    let mut ranks = vec![1.0 / count; n];
    let mut next = vec![0.0; n];
    for _ in 0..MAX_ITERATIONS {
        let dangling: f64 = (0..n)
            .filter(|&node| view.out(node).is_empty())
            .map(|node| ranks[node])
            .sum();
        let base = (1.0 - DAMPING) / count + DAMPING * dangling / count;
        next.fill(base);
        for node in 0..n {
            let out = view.out(node);
            if out.is_empty() {
                continue;
            }
            let share = DAMPING * ranks[node] / out.len() as f64;
            for &target in out {
                next[target] += share;
            }
        }
        let residual: f64 = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut ranks, &mut next);
        if residual <= TOLERANCE {
            break;
        }
    }
    ranks
}
