//! In-memory graph model shared by the generators, the centrality engine,
//! and the seed selector.
//!
//! Nodes are insertion-ordered and identified by dense [`NodeId`]s. Edges
//! are stored with the orientation their producer chose (generators attach
//! the new node as `source`), while edge *identity* is the unordered pair:
//! a second insertion of `(v, u)` after `(u, v)` is a duplicate. Adjacency
//! lists record both directions in insertion order, so every traversal over
//! the graph is deterministic.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedcastError};

/// Opaque, stable identifier for a node.
///
/// Ids are dense indices assigned in insertion order and serialize as bare
/// integers in the canonical payload.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw index as a node id.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense index backing this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node together with its optional cluster tag.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Node {
    /// Identifier of the node.
    pub id: NodeId,
    /// Cluster tag attached by the ingestion collaborator, if any.
    pub cluster: Option<u32>,
}

impl Node {
    /// Creates a node record.
    #[must_use]
    pub const fn new(id: NodeId, cluster: Option<u32>) -> Self {
        Self { id, cluster }
    }
}

/// A single edge in producer orientation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Edge {
    /// Endpoint the producer attached the edge from.
    pub source: NodeId,
    /// Endpoint the edge was attached to.
    pub target: NodeId,
}

impl Edge {
    /// Creates an edge record.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

/// Canonical serializable graph shape exchanged with collaborators.
///
/// Serializes as `{ "nodes": [{"id", "cluster"}], "links": [{"source",
/// "target"}] }`; [`Graph::from_payload`] turns it back into a validated
/// graph.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GraphPayload {
    /// Node records in insertion order.
    pub nodes: Vec<Node>,
    /// Edge records in producer orientation.
    pub links: Vec<Edge>,
}

/// Immutable-after-generation node/edge container with adjacency and degree
/// bookkeeping.
///
/// # Examples
/// ```
/// use seedcast_core::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(None);
/// let b = graph.add_node(Some(1));
/// assert!(graph.add_edge(a, b)?);
/// assert!(!graph.add_edge(b, a)?); // unordered duplicate
/// assert_eq!(graph.degree(a), 1);
/// # Ok::<(), seedcast_core::SeedcastError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding `count` untagged nodes and no edges.
    #[must_use]
    pub fn with_node_count(count: usize) -> Self {
        let nodes = (0..count)
            .map(|index| Node::new(NodeId::new(index), None))
            .collect();
        Self {
            nodes,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); count],
        }
    }

    /// Appends a node and returns its id.
    pub fn add_node(&mut self, cluster: Option<u32>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(id, cluster));
        self.adjacency.push(Vec::new());
        id
    }

    /// Inserts an edge between two existing nodes.
    ///
    /// Returns `Ok(true)` when the edge was inserted and `Ok(false)` when
    /// it was skipped as a self-loop or as a duplicate of an existing edge
    /// in either orientation.
    ///
    /// # Errors
    /// Returns [`SeedcastError::UnknownNode`] when either endpoint is not
    /// in the graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<bool> {
        let node_count = self.nodes.len();
        for endpoint in [source, target] {
            if endpoint.index() >= node_count {
                return Err(SeedcastError::UnknownNode {
                    node: endpoint,
                    node_count,
                });
            }
        }
        if source == target || self.has_edge(source, target) {
            return Ok(false);
        }
        self.edges.push(Edge::new(source, target));
        self.adjacency[source.index()].push(target);
        self.adjacency[target.index()].push(source);
        Ok(true)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node records in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edge records in producer orientation.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node record.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Whether `id` names a node in this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Neighbours of `id` across both orientations, in insertion order.
    ///
    /// Unknown ids yield an empty slice.
    #[must_use]
    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        self.adjacency
            .get(id.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Undirected degree of `id`; 0 for unknown ids.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbours(id).len()
    }

    /// Whether an edge joins `u` and `v` in either orientation.
    #[must_use]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbours(u).contains(&v)
    }

    /// Clones the graph into its canonical serializable shape.
    #[must_use]
    pub fn to_payload(&self) -> GraphPayload {
        GraphPayload {
            nodes: self.nodes.clone(),
            links: self.edges.clone(),
        }
    }

    /// Rebuilds a graph from its canonical payload.
    ///
    /// Node records must be dense and ordered (the record at position `i`
    /// carries id `i`). Self-loop and duplicate links are skipped, matching
    /// the ingestion boundary rules.
    ///
    /// # Errors
    /// Returns [`SeedcastError::InvalidParameter`] when the node list is
    /// not dense and ordered, and [`SeedcastError::UnknownNode`] when a
    /// link references an id outside the node list.
    pub fn from_payload(payload: GraphPayload) -> Result<Self> {
        for (position, node) in payload.nodes.iter().enumerate() {
            if node.id.index() != position {
                return Err(SeedcastError::invalid_parameter(format!(
                    "payload node at position {position} carries id {}; \
                     node records must be dense and ordered",
                    node.id
                )));
            }
        }
        let count = payload.nodes.len();
        let mut graph = Self {
            nodes: payload.nodes,
            edges: Vec::with_capacity(payload.links.len()),
            adjacency: vec![Vec::new(); count],
        };
        let mut skipped = 0_usize;
        for link in payload.links {
            if !graph.add_edge(link.source, link.target)? {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "dropped self-loop or duplicate payload links");
        }
        Ok(graph)
    }
}
