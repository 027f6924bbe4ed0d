//! Wasserman–Faust closeness centrality on the directed view.

use std::collections::VecDeque;

use super::DirectedView;

/// Closeness of every node over outgoing BFS distances.
///
/// The Wasserman–Faust variant stays defined on disconnected graphs by
/// weighting the inverse average distance with the reachable fraction:
/// `((r-1)/(n-1)) * ((r-1)/sum_d)` where `r` counts reached nodes
/// including the source. Nodes that reach nothing score `0.0`.
pub(super) fn wasserman_faust_scores(view: &DirectedView) -> Vec<f64> {
    let n = view.node_count();
    let mut scores = vec![0.0; n];
    if n < 2 {
        return scores;
    }
    let mut distance = vec![-1_i64; n];
    for source in 0..n {
        distance.fill(-1);
        distance[source] = 0;
        let mut queue = VecDeque::from([source]);
        let mut reached = 0_usize;
        let mut total_distance = 0_i64;
        while let Some(u) = queue.pop_front() {
            reached += 1;
            total_distance += distance[u];
            for &v in view.out(u) {
                if distance[v] < 0 {
                    distance[v] = distance[u] + 1;
                    queue.push_back(v);
                }
            }
        }
        if reached > 1 {
            let fraction = (reached - 1) as f64 / (n - 1) as f64;
            scores[source] = fraction * ((reached - 1) as f64 / total_distance as f64);
        }
    }
    scores
}
