//! Brandes betweenness centrality on the directed view.

use std::collections::VecDeque;

use rayon::prelude::*;

use super::DirectedView;

/// Sources handled per parallel work unit. Fixed so the accumulation
/// order, and therefore the result, is identical run to run regardless of
/// thread count.
const SOURCE_CHUNK: usize = 64;

/// Fraction of all-pairs shortest paths passing through each node,
/// normalised by `(n-1)(n-2)`.
pub(super) fn directed_scores(view: &DirectedView) -> Vec<f64> {
    let n = view.node_count();
    if n < 3 {
        return vec![0.0; n];
    }
    let sources: Vec<usize> = (0..n).collect();
    let partials: Vec<Vec<f64>> = sources
        .par_chunks(SOURCE_CHUNK)
        .map(|chunk| {
            let mut local = vec![0.0; n];
            for &source in chunk {
                accumulate_from_source(view, source, &mut local);
            }
            local
        })
        .collect();

    let mut raw = vec![0.0; n];
    for partial in partials {
        for (total, value) in raw.iter_mut().zip(partial) {
            *total += value;
        }
    }
    let scale = 1.0 / (((n - 1) * (n - 2)) as f64);
    raw.iter().map(|value| value * scale).collect()
}

/// One source round of Brandes' algorithm: BFS counting shortest paths,
/// then dependency accumulation in reverse visit order.
fn accumulate_from_source(view: &DirectedView, source: usize, scores: &mut [f64]) {
    let n = view.node_count();
    let mut sigma = vec![0.0_f64; n];
    let mut distance = vec![-1_i64; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut visit_order = Vec::with_capacity(n);

    sigma[source] = 1.0;
    distance[source] = 0;
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        visit_order.push(u);
        for &v in view.out(u) {
            if distance[v] < 0 {
                distance[v] = distance[u] + 1;
                queue.push_back(v);
            }
            if distance[v] == distance[u] + 1 {
                sigma[v] += sigma[u];
                predecessors[v].push(u);
            }
        }
    }

    let mut delta = vec![0.0_f64; n];
    for &w in visit_order.iter().rev() {
        for &u in &predecessors[w] {
            delta[u] += sigma[u] / sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            scores[w] += delta[w];
        }
    }
}
