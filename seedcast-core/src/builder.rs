//! Ingestion boundary turning already-parsed rows into a [`Graph`].
//!
//! Collaborators hand the core edge rows (`source`, `target` labels) and
//! optional attribute rows (`label`, cluster tag). The builder interns each
//! distinct label to a dense [`NodeId`] in first-seen order, so downstream
//! code only ever handles one endpoint representation. Self-loop and
//! duplicate rows are dropped here, not surfaced as errors.

use std::collections::HashMap;

use crate::graph::{Graph, NodeId};

/// Accumulates rows from an ingestion collaborator and builds a [`Graph`].
///
/// # Examples
/// ```
/// use seedcast_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.link("ana", "bruno");
/// builder.link("bruno", "carla");
/// builder.tag("ana", 2);
/// let (graph, labels) = builder.build();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(labels[0], "ana");
/// assert_eq!(graph.nodes()[0].cluster, Some(2));
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    clusters: Vec<Option<u32>>,
    links: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `label`, returning the node id it maps to.
    ///
    /// The first mention of a label assigns the next dense id; later
    /// mentions return the same id.
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = NodeId::new(self.labels.len());
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), id);
        self.clusters.push(None);
        id
    }

    /// Records an edge row between two labelled endpoints.
    pub fn link(&mut self, source: &str, target: &str) {
        let source = self.intern(source);
        let target = self.intern(target);
        self.links.push((source, target));
    }

    /// Records an attribute row attaching a cluster tag to `label`.
    ///
    /// A label mentioned only in attribute rows still becomes a node; the
    /// last tag recorded for a label wins.
    pub fn tag(&mut self, label: &str, cluster: u32) {
        let id = self.intern(label);
        self.clusters[id.index()] = Some(cluster);
    }

    /// Number of distinct labels interned so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Builds the graph, returning it alongside the interned labels in id
    /// order.
    ///
    /// Self-loop and duplicate rows are dropped; the drop counts are
    /// reported at debug level.
    #[must_use]
    pub fn build(self) -> (Graph, Vec<String>) {
        let mut graph = Graph::new();
        for cluster in &self.clusters {
            graph.add_node(*cluster);
        }
        let mut skipped = 0_usize;
        for (source, target) in self.links {
            // Endpoints were interned, so the only add_edge outcomes are
            // inserted or skipped.
            if !matches!(graph.add_edge(source, target), Ok(true)) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "dropped self-loop or duplicate edge rows");
        }
        (graph, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_intern_to_stable_ids_in_first_seen_order() {
        let mut builder = GraphBuilder::new();
        let a = builder.intern("a");
        let b = builder.intern("b");
        assert_eq!(builder.intern("a"), a);
        assert_eq!((a.index(), b.index()), (0, 1));
    }

    #[test]
    fn attribute_only_labels_become_isolated_nodes() {
        let mut builder = GraphBuilder::new();
        builder.link("a", "b");
        builder.tag("hermit", 3);
        let (graph, labels) = builder.build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.degree(NodeId::new(2)), 0);
        assert_eq!(labels[2], "hermit");
        assert_eq!(graph.nodes()[2].cluster, Some(3));
    }

    #[test]
    fn later_tags_overwrite_earlier_ones() {
        let mut builder = GraphBuilder::new();
        builder.tag("a", 1);
        builder.tag("a", 2);
        let (graph, _labels) = builder.build();
        assert_eq!(graph.nodes()[0].cluster, Some(2));
    }

    #[test]
    fn self_loop_and_duplicate_rows_are_dropped() {
        let mut builder = GraphBuilder::new();
        builder.link("a", "b");
        builder.link("b", "a");
        builder.link("a", "a");
        let (graph, _labels) = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
