//! Barabási–Albert preferential-attachment generator.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::instrument;

use crate::error::{Result, SeedcastError};
use crate::graph::Graph;

use super::{DEFAULT_RNG_SEED, attach, preferential_target, seed_clique};

/// Validated parameters for Barabási–Albert generation.
///
/// Growth starts from a complete graph over `min(attachment + 1, nodes)`
/// nodes; every later node attaches `min(attachment, existing)` edges to
/// targets drawn with probability proportional to current degree.
///
/// # Examples
/// ```
/// use seedcast_core::BarabasiAlbert;
///
/// let graph = BarabasiAlbert::new(6, 2)?.with_rng_seed(7).generate();
/// assert_eq!(graph.node_count(), 6);
/// # Ok::<(), seedcast_core::SeedcastError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BarabasiAlbert {
    nodes: usize,
    attachment: usize,
    rng_seed: u64,
}

impl BarabasiAlbert {
    /// Creates a parameter set for a graph of `nodes` nodes attaching
    /// `attachment` edges per new node.
    ///
    /// # Errors
    /// Returns [`SeedcastError::InvalidParameter`] unless `nodes >= 2` and
    /// `1 <= attachment <= nodes`.
    pub fn new(nodes: usize, attachment: usize) -> Result<Self> {
        if nodes < 2 {
            return Err(SeedcastError::invalid_parameter(format!(
                "nodes must be at least 2 (got {nodes})"
            )));
        }
        if attachment == 0 {
            return Err(SeedcastError::invalid_parameter(
                "attachment must be at least 1 (got 0)",
            ));
        }
        if attachment > nodes {
            return Err(SeedcastError::invalid_parameter(format!(
                "attachment ({attachment}) must not exceed nodes ({nodes})"
            )));
        }
        Ok(Self {
            nodes,
            attachment,
            rng_seed: DEFAULT_RNG_SEED,
        })
    }

    /// Seeds the internal RNG to make generation deterministic.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the requested node count.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of edges attached per new node.
    #[must_use]
    pub const fn attachment(&self) -> usize {
        self.attachment
    }

    /// Returns the RNG seed generation will use.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Generates a fresh graph from the stored seed.
    #[must_use]
    pub fn generate(&self) -> Graph {
        let mut rng = SmallRng::seed_from_u64(self.rng_seed);
        self.generate_with_rng(&mut rng)
    }

    /// Generates a fresh graph drawing randomness from `rng`.
    #[instrument(
        name = "generate.ba",
        skip(self, rng),
        fields(nodes = self.nodes, attachment = self.attachment)
    )]
    #[must_use]
    pub fn generate_with_rng(&self, rng: &mut SmallRng) -> Graph {
        let seed_size = (self.attachment + 1).min(self.nodes);
        let mut graph = Graph::with_node_count(self.nodes);
        seed_clique(&mut graph, seed_size);

        for node in seed_size..self.nodes {
            let budget = self.attachment.min(node);
            let mut connected = vec![false; node];
            for _ in 0..budget {
                // The open candidate set shrinks by one per attachment and
                // starts larger than the budget, so a draw always lands.
                let Some(target) = preferential_target(rng, &graph, &connected) else {
                    break;
                };
                attach(&mut graph, node, target);
                connected[target] = true;
            }
        }

        tracing::debug!(edges = graph.edge_count(), "graph generated");
        graph
    }
}
