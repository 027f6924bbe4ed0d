//! Error types for the seedcast core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use crate::graph::NodeId;

/// Errors returned by graph construction and generation.
///
/// Empty graphs and unreachable nodes are not represented here: every
/// analysis operation degrades to empty or zero-valued output for them
/// instead of failing.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum SeedcastError {
    /// A generator or selector parameter was outside its documented range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Human-readable description of the violated precondition.
        reason: String,
    },
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    UnknownNode {
        /// The unknown node id referenced by the edge.
        node: NodeId,
        /// The number of nodes in the graph.
        node_count: usize,
    },
}

impl SeedcastError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SeedcastErrorCode {
        match self {
            Self::InvalidParameter { .. } => SeedcastErrorCode::InvalidParameter,
            Self::UnknownNode { .. } => SeedcastErrorCode::UnknownNode,
        }
    }

    pub(crate) fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}

/// Machine-readable error codes for [`SeedcastError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SeedcastErrorCode {
    /// A parameter was outside its documented range.
    InvalidParameter,
    /// An edge referenced a node id that is not present in the graph.
    UnknownNode,
}

impl SeedcastErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::UnknownNode => "UNKNOWN_NODE",
        }
    }
}

impl std::fmt::Display for SeedcastErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, SeedcastError>;
