//! Seedcast core library.
//!
//! Synthesises social-style graphs with the Barabási–Albert and Holme–Kim
//! models, scores every node on seven centrality metrics, and selects
//! propagation seed nodes under pluggable ranking policies. Generation and
//! scoring are deterministic for a fixed RNG seed, never perform I/O, and
//! degrade to empty or zero-valued output on empty, singleton, and
//! disconnected graphs rather than failing.

mod builder;
mod centrality;
mod error;
mod generate;
mod graph;
mod seed;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GraphBuilder,
    centrality::{CentralityMap, CentralityRecord, compute_centrality},
    error::{Result, SeedcastError, SeedcastErrorCode},
    generate::{BarabasiAlbert, DEFAULT_RNG_SEED, HolmeKim},
    graph::{Edge, Graph, GraphPayload, Node, NodeId},
    seed::{DEFAULT_RANDOM_SEED, Orientation, SeedPolicy, SeedSelector},
};
