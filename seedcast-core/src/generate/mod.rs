//! Random-graph generators in the preferential-attachment family.
//!
//! [`BarabasiAlbert`] grows a scale-free graph by degree-proportional
//! attachment; [`HolmeKim`] extends it with a triad-closure step that
//! raises local clustering while preserving the degree-distribution tail.
//! Both are deterministic for a fixed seed and never mutate a previously
//! returned graph.

mod barabasi_albert;
mod holme_kim;


use rand::{Rng, rngs::SmallRng};

use crate::graph::{Graph, NodeId};

pub use barabasi_albert::BarabasiAlbert;
pub use holme_kim::HolmeKim;

/// Seed used by generators unless overridden with `with_rng_seed`.
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_CA57;

/// Picks an attachment target with probability proportional to current
/// degree.
///
/// Candidates are the indices of `connected`; entries flagged `true` are
/// excluded. When every open candidate has degree zero the choice degrades
/// to a uniform draw. `None` means no candidate remains, which callers
/// treat as the stop signal for the current node rather than an error.
fn preferential_target(rng: &mut SmallRng, graph: &Graph, connected: &[bool]) -> Option<usize> {
    let open = |(candidate, taken): (usize, &bool)| (!taken).then_some(candidate);
    let degree_of = |candidate: usize| graph.degree(NodeId::new(candidate));

    let total: usize = connected
        .iter()
        .enumerate()
        .filter_map(open)
        .map(degree_of)
        .sum();
    if total == 0 {
        return uniform_target(rng, connected);
    }
    let mut threshold = rng.gen_range(0..total);
    for candidate in connected.iter().enumerate().filter_map(open) {
        let degree = degree_of(candidate);
        if threshold < degree {
            return Some(candidate);
        }
        threshold -= degree;
    }
    None
}

/// Uniform fallback draw among the open entries of `connected`.
fn uniform_target(rng: &mut SmallRng, connected: &[bool]) -> Option<usize> {
    let open: Vec<usize> = connected
        .iter()
        .enumerate()
        .filter_map(|(candidate, &taken)| (!taken).then_some(candidate))
        .collect();
    if open.is_empty() {
        return None;
    }
    let pick = rng.gen_range(0..open.len());
    open.get(pick).copied()
}

/// Inserts one generator attachment and keeps the local invariants honest.
fn attach(graph: &mut Graph, source: usize, target: usize) {
    let inserted = matches!(
        graph.add_edge(NodeId::new(source), NodeId::new(target)),
        Ok(true)
    );
    debug_assert!(inserted, "generator attachments target open, existing nodes");
}

/// Builds the initial complete graph over the first `m0` nodes, lower id
/// as edge source.
fn seed_clique(graph: &mut Graph, m0: usize) {
    for i in 0..m0 {
        for j in (i + 1)..m0 {
            attach(graph, i, j);
        }
    }
}
