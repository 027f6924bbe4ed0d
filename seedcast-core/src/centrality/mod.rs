//! Centrality engine scoring every node on seven metrics.
//!
//! Degree (in, out, total), betweenness, closeness and PageRank are
//! computed on the directed view defined by edge orientation; eigenvector
//! centrality works on the undirected adjacency, mirroring how the scores
//! were historically consumed. All metrics land in `[0, 1]`, unreachable
//! or undefined values degrade to `0.0`, and no structurally valid graph
//! makes the engine fail.

mod betweenness;
mod closeness;
mod eigenvector;
mod pagerank;

#[cfg(test)]
mod tests;

use tracing::instrument;

use crate::graph::{Graph, NodeId};

/// Per-node metric record.
///
/// Degree values are normalised by `|V| - 1`; the remaining metrics carry
/// their standard normalisations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentralityRecord {
    /// Node the record describes.
    pub node: NodeId,
    /// Incoming-degree centrality.
    pub degree_in: f64,
    /// Outgoing-degree centrality.
    pub degree_out: f64,
    /// Total-degree centrality.
    pub degree_total: f64,
    /// Brandes betweenness, normalised by `(n-1)(n-2)`.
    pub betweenness: f64,
    /// Wasserman–Faust closeness over outgoing distances.
    pub closeness: f64,
    /// Power-iteration eigenvector score, max-rescaled to 1.
    pub eigenvector: f64,
    /// PageRank under damping 0.85.
    pub pagerank: f64,
}

/// Metric records for every node of one graph, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CentralityMap {
    records: Vec<CentralityRecord>,
}

impl CentralityMap {
    /// Looks up the record for `node`.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&CentralityRecord> {
        self.records.get(node.index())
    }

    /// All records in node-insertion order.
    #[must_use]
    pub fn records(&self) -> &[CentralityRecord] {
        &self.records
    }

    /// Number of scored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the map holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Directed adjacency caches shared by the metric passes.
pub(crate) struct DirectedView {
    outgoing: Vec<Vec<usize>>,
    incoming_degree: Vec<usize>,
}

impl DirectedView {
    pub(crate) fn from_graph(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut outgoing = vec![Vec::new(); n];
        let mut incoming_degree = vec![0_usize; n];
        for edge in graph.edges() {
            outgoing[edge.source.index()].push(edge.target.index());
            incoming_degree[edge.target.index()] += 1;
        }
        Self {
            outgoing,
            incoming_degree,
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub(crate) fn out(&self, node: usize) -> &[usize] {
        self.outgoing.get(node).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn in_degree(&self, node: usize) -> usize {
        self.incoming_degree.get(node).copied().unwrap_or(0)
    }
}

/// Scores every node of `graph` on the seven supported metrics.
///
/// An empty graph yields an empty map; a singleton graph yields a record
/// of zeroes. The call never fails for a structurally valid graph, however
/// disconnected.
///
/// # Examples
/// ```
/// use seedcast_core::{BarabasiAlbert, compute_centrality};
///
/// let graph = BarabasiAlbert::new(12, 2)?.generate();
/// let metrics = compute_centrality(&graph);
/// assert_eq!(metrics.len(), 12);
/// # Ok::<(), seedcast_core::SeedcastError>(())
/// ```
#[instrument(
    name = "centrality.compute",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
#[must_use]
pub fn compute_centrality(graph: &Graph) -> CentralityMap {
    let n = graph.node_count();
    if n == 0 {
        return CentralityMap::default();
    }
    let view = DirectedView::from_graph(graph);
    let betweenness = betweenness::directed_scores(&view);
    let closeness = closeness::wasserman_faust_scores(&view);
    let eigenvector = eigenvector::power_iteration_scores(graph);
    let pagerank = pagerank::damped_scores(&view);

    let degree_scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    let at = |values: &[f64], index: usize| values.get(index).copied().unwrap_or(0.0);

    let records = (0..n)
        .map(|index| {
            let node = NodeId::new(index);
            CentralityRecord {
                node,
                degree_in: view.in_degree(index) as f64 * degree_scale,
                degree_out: view.out(index).len() as f64 * degree_scale,
                degree_total: graph.degree(node) as f64 * degree_scale,
                betweenness: at(&betweenness, index),
                closeness: at(&closeness, index),
                eigenvector: at(&eigenvector, index),
                pagerank: at(&pagerank, index),
            }
        })
        .collect();
    CentralityMap { records }
}
