//! Holme–Kim triad-extended preferential-attachment generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::instrument;

use crate::error::{Result, SeedcastError};
use crate::graph::{Graph, NodeId};

use super::{DEFAULT_RNG_SEED, attach, preferential_target, seed_clique};

/// Validated parameters for Holme–Kim generation.
///
/// Each new node attaches exactly `attachment` edges: the first by
/// preferential attachment, each of the rest by triad closure with
/// probability `closure_probability` (connecting to a random neighbour of
/// the most recently attached target) and by preferential attachment
/// otherwise or whenever the triad candidate is invalid. Every branch adds
/// exactly one edge, so the per-node budget never drifts.
///
/// # Examples
/// ```
/// use seedcast_core::HolmeKim;
///
/// let graph = HolmeKim::new(10, 3, 0.8)?.generate();
/// assert_eq!(graph.node_count(), 10);
/// # Ok::<(), seedcast_core::SeedcastError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HolmeKim {
    nodes: usize,
    attachment: usize,
    closure_probability: f64,
    rng_seed: u64,
}

impl HolmeKim {
    /// Creates a parameter set for `nodes` nodes, `attachment` edges per
    /// new node, and triad-closure probability `closure_probability`.
    ///
    /// # Errors
    /// Returns [`SeedcastError::InvalidParameter`] unless `nodes >= 2`,
    /// `1 <= attachment < nodes`, and `closure_probability` is a finite
    /// value in `[0, 1]`.
    pub fn new(nodes: usize, attachment: usize, closure_probability: f64) -> Result<Self> {
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
        if attachment >= nodes {
            return Err(SeedcastError::invalid_parameter(format!(
                "attachment ({attachment}) must be less than nodes ({nodes})"
            )));
        }
        if !closure_probability.is_finite() || !(0.0..=1.0).contains(&closure_probability) {
            return Err(SeedcastError::invalid_parameter(format!(
                "closure probability must lie in [0, 1] (got {closure_probability})"
            )));
        }
        Ok(Self {
            nodes,
            attachment,
            closure_probability,
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

    /// Returns the triad-closure probability.
    #[must_use]
    pub const fn closure_probability(&self) -> f64 {
        self.closure_probability
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
        name = "generate.hk",
        skip(self, rng),
        fields(
            nodes = self.nodes,
            attachment = self.attachment,
            closure_probability = self.closure_probability,
        )
    )]
    #[must_use]
    pub fn generate_with_rng(&self, rng: &mut SmallRng) -> Graph {
        let seed_size = self.attachment + 1;
        let mut graph = Graph::with_node_count(self.nodes);
        seed_clique(&mut graph, seed_size);

        for node in seed_size..self.nodes {
            let mut connected = vec![false; node];
            let Some(first) = preferential_target(rng, &graph, &connected) else {
                break;
            };
            attach(&mut graph, node, first);
            connected[first] = true;
            let mut last = first;

            for _ in 1..self.attachment {
                let triad = if rng.gen_bool(self.closure_probability) {
                    triad_target(rng, &graph, last, &connected)
                } else {
                    None
                };
                let Some(target) =
                    triad.or_else(|| preferential_target(rng, &graph, &connected))
                else {
                    break;
                };
                attach(&mut graph, node, target);
                connected[target] = true;
                last = target;
            }
        }

        tracing::debug!(edges = graph.edge_count(), "graph generated");
        graph
    }
}

/// Samples one neighbour of `last` as a triad-closure candidate.
///
/// Sample-then-test: an invalid draw (the new node itself, or an endpoint
/// already connected this round) returns `None` so the caller falls back
/// to preferential attachment instead of re-rolling.
fn triad_target(
    rng: &mut SmallRng,
    graph: &Graph,
    last: usize,
    connected: &[bool],
) -> Option<usize> {
    let neighbours = graph.neighbours(NodeId::new(last));
    if neighbours.is_empty() {
        return None;
    }
    let pick = rng.gen_range(0..neighbours.len());
    let candidate = neighbours.get(pick)?.index();
    match connected.get(candidate) {
        Some(false) => Some(candidate),
        // Out of range means the new node itself; true means already taken.
        _ => None,
    }
}
