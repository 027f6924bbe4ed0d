//! Seed-selection policies ranking nodes for propagation triggers.
//!
//! A [`SeedSelector`] filters the candidate pool by an optional cluster
//! tag, ranks it under one of four policies, and returns the top `k`
//! nodes. `k` is clamped to `[1, pool]`; an empty filtered pool yields an
//! empty list so callers can present a "no valid seed" outcome instead of
//! handling an error.

use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::instrument;

use crate::centrality::{CentralityMap, CentralityRecord};
use crate::graph::{Graph, NodeId};

/// Seed used by [`SeedPolicy::Random`] unless the caller overrides it.
pub const DEFAULT_RANDOM_SEED: u64 = 42;

/// Ranking rule for seed selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeedPolicy {
    /// Seeded Fisher–Yates shuffle; deterministic for a fixed seed.
    Random {
        /// Shuffle seed; [`DEFAULT_RANDOM_SEED`] unless overridden.
        seed: u64,
    },
    /// Descending degree (out-degree when directed, total otherwise).
    DegreeCentral,
    /// Descending PageRank when directed, eigenvector otherwise.
    Influence,
    /// Descending betweenness.
    Bridge,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::Random {
            seed: DEFAULT_RANDOM_SEED,
        }
    }
}

/// Whether rank metrics read the directed or undirected interpretation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Orientation {
    /// Rank on directed metrics (out-degree, PageRank).
    Directed,
    /// Rank on undirected metrics (total degree, eigenvector).
    #[default]
    Undirected,
}

/// Configured seed selection over one graph and its metric map.
///
/// # Examples
/// ```
/// use seedcast_core::{
///     BarabasiAlbert, SeedPolicy, SeedSelector, compute_centrality,
/// };
///
/// let graph = BarabasiAlbert::new(12, 2)?.generate();
/// let metrics = compute_centrality(&graph);
/// let seeds = SeedSelector::new(SeedPolicy::Bridge, 3).select(&graph, &metrics);
/// assert_eq!(seeds.len(), 3);
/// # Ok::<(), seedcast_core::SeedcastError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SeedSelector {
    policy: SeedPolicy,
    k: usize,
    orientation: Orientation,
    cluster: Option<u32>,
}

impl SeedSelector {
    /// Creates a selector for `policy` returning up to `k` nodes.
    #[must_use]
    pub const fn new(policy: SeedPolicy, k: usize) -> Self {
        Self {
            policy,
            k,
            orientation: Orientation::Undirected,
            cluster: None,
        }
    }

    /// Switches between directed and undirected ranking metrics.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Restricts the candidate pool to nodes tagged with `cluster`.
    #[must_use]
    pub const fn with_cluster(mut self, cluster: u32) -> Self {
        self.cluster = Some(cluster);
        self
    }

    /// Returns the configured policy.
    #[must_use]
    pub const fn policy(&self) -> SeedPolicy {
        self.policy
    }

    /// Returns the requested seed count before clamping.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Returns the configured orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the cluster filter, if any.
    #[must_use]
    pub const fn cluster(&self) -> Option<u32> {
        self.cluster
    }

    /// Ranks the candidate pool and returns the selected node ids in
    /// ranking order.
    ///
    /// Ties rank in node-insertion order; nodes absent from `metrics`
    /// rank with metric value 0.
    #[instrument(
        name = "seed.select",
        skip(self, graph, metrics),
        fields(policy = ?self.policy, k = self.k, cluster = self.cluster)
    )]
    #[must_use]
    pub fn select(&self, graph: &Graph, metrics: &CentralityMap) -> Vec<NodeId> {
        let mut pool: Vec<NodeId> = graph
            .nodes()
            .iter()
            .filter(|node| self.cluster.is_none_or(|tag| node.cluster == Some(tag)))
            .map(|node| node.id)
            .collect();
        if pool.is_empty() {
            tracing::debug!("candidate pool is empty after cluster filtering");
            return pool;
        }
        let take = self.k.clamp(1, pool.len());

        match self.policy {
            SeedPolicy::Random { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                pool.shuffle(&mut rng);
            }
            SeedPolicy::DegreeCentral | SeedPolicy::Influence | SeedPolicy::Bridge => {
                let value = |id: NodeId| {
                    metrics
                        .get(id)
                        .map_or(0.0, |record| self.ranking_value(record))
                };
                // Stable sort keeps insertion order among ties.
                pool.sort_by(|a, b| value(*b).total_cmp(&value(*a)));
            }
        }
        pool.truncate(take);
        pool
    }

    fn ranking_value(&self, record: &CentralityRecord) -> f64 {
        match (self.policy, self.orientation) {
            (SeedPolicy::DegreeCentral, Orientation::Directed) => record.degree_out,
            (SeedPolicy::DegreeCentral, Orientation::Undirected) => record.degree_total,
            (SeedPolicy::Influence, Orientation::Directed) => record.pagerank,
            (SeedPolicy::Influence, Orientation::Undirected) => record.eigenvector,
            (SeedPolicy::Bridge, _) => record.betweenness,
            (SeedPolicy::Random { .. }, _) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::centrality::compute_centrality;
    use crate::generate::HolmeKim;
    use crate::graph::{Graph, NodeId};

    use super::{Orientation, SeedPolicy, SeedSelector};

    fn out_star() -> Graph {
        let mut graph = Graph::with_node_count(5);
        for leaf in 1..5 {
            graph.add_edge(NodeId::new(0), NodeId::new(leaf)).unwrap();
        }
        graph
    }

    #[test]
    fn random_selection_is_identical_across_calls() {
        let graph = HolmeKim::new(20, 2, 0.4).expect("valid parameters").generate();
        let metrics = compute_centrality(&graph);
        let selector = SeedSelector::new(SeedPolicy::default(), 6);
        let first = selector.select(&graph, &metrics);
        let second = selector.select(&graph, &metrics);
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn degree_ranking_is_non_increasing() {
        let graph = HolmeKim::new(30, 3, 0.6).expect("valid parameters").generate();
        let metrics = compute_centrality(&graph);
        let seeds = SeedSelector::new(SeedPolicy::DegreeCentral, 30).select(&graph, &metrics);
        let degrees: Vec<usize> = seeds.iter().map(|&id| graph.degree(id)).collect();
        assert!(
            degrees.windows(2).all(|pair| pair[0] >= pair[1]),
            "degrees not sorted: {degrees:?}"
        );
    }

    #[test]
    fn directed_degree_ranking_reads_out_degree() {
        // 0 -> 1, 0 -> 2, 3 -> 0: out-degrees 2, 0, 0, 1.
        let mut graph = Graph::with_node_count(4);
        graph.add_edge(NodeId::new(0), NodeId::new(1)).unwrap();
        graph.add_edge(NodeId::new(0), NodeId::new(2)).unwrap();
        graph.add_edge(NodeId::new(3), NodeId::new(0)).unwrap();
        let metrics = compute_centrality(&graph);
        let seeds = SeedSelector::new(SeedPolicy::DegreeCentral, 2)
            .with_orientation(Orientation::Directed)
            .select(&graph, &metrics);
        assert_eq!(seeds, vec![NodeId::new(0), NodeId::new(3)]);
    }

    #[test]
    fn influence_orientation_switches_between_pagerank_and_eigenvector() {
        let graph = out_star();
        let metrics = compute_centrality(&graph);
        // Directed: the hub pushes its rank onto the leaves.
        let directed = SeedSelector::new(SeedPolicy::Influence, 1)
            .with_orientation(Orientation::Directed)
            .select(&graph, &metrics);
        assert_eq!(directed, vec![NodeId::new(1)]);
        // Undirected: the hub carries the eigenvector mass.
        let undirected = SeedSelector::new(SeedPolicy::Influence, 1).select(&graph, &metrics);
        assert_eq!(undirected, vec![NodeId::new(0)]);
    }

    #[test]
    fn bridge_ranking_prefers_the_cut_vertex() {
        let mut graph = Graph::with_node_count(3);
        graph.add_edge(NodeId::new(0), NodeId::new(1)).unwrap();
        graph.add_edge(NodeId::new(1), NodeId::new(2)).unwrap();
        let metrics = compute_centrality(&graph);
        let seeds = SeedSelector::new(SeedPolicy::Bridge, 1).select(&graph, &metrics);
        assert_eq!(seeds, vec![NodeId::new(1)]);
    }

    #[rstest]
    #[case::zero_clamps_up(0, 1)]
    #[case::within_pool(3, 3)]
    #[case::beyond_pool_clamps_down(100, 5)]
    fn k_is_clamped_to_the_pool(#[case] k: usize, #[case] expected: usize) {
        let graph = out_star();
        let metrics = compute_centrality(&graph);
        let seeds = SeedSelector::new(SeedPolicy::DegreeCentral, k).select(&graph, &metrics);
        assert_eq!(seeds.len(), expected);
    }

    #[test]
    fn cluster_filter_shrinks_the_pool_before_clamping() {
        let mut graph = Graph::new();
        for cluster in [Some(0), Some(0), Some(1), Some(1), None] {
            graph.add_node(cluster);
        }
        let metrics = compute_centrality(&graph);
        let seeds = SeedSelector::new(SeedPolicy::DegreeCentral, 10)
            .with_cluster(1)
            .select(&graph, &metrics);
        assert_eq!(seeds, vec![NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn empty_filtered_pool_yields_an_empty_list() {
        let graph = out_star();
        let metrics = compute_centrality(&graph);
        let seeds = SeedSelector::new(SeedPolicy::Bridge, 3)
            .with_cluster(7)
            .select(&graph, &metrics);
        assert!(seeds.is_empty());
    }

    #[test]
    fn ties_and_missing_metrics_fall_back_to_insertion_order() {
        let graph = Graph::with_node_count(4);
        let empty = compute_centrality(&Graph::new());
        let seeds = SeedSelector::new(SeedPolicy::Influence, 3).select(&graph, &empty);
        assert_eq!(seeds, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
    }
}
