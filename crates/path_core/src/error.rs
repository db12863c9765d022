//! Error types for path computation and problem-token parsing.

use thiserror::Error;

use crate::NodeName;

/// Errors returned by [`crate::compute`] and [`crate::Graph::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No node names were supplied, so there is neither source nor sink.
    #[error("graph has no nodes")]
    Empty,

    /// The same name appears twice in the node list.
    #[error("duplicate node name: {name}")]
    DuplicateNode { name: NodeName },

    /// The sink cannot be reached from the source.
    #[error("No path found from {from} to {to}")]
    Unreachable { from: NodeName, to: NodeName },
}

/// Errors from [`crate::Problem::from_tokens`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("missing node count")]
    MissingCount,

    #[error("invalid node count '{token}': expected a positive integer")]
    InvalidCount { token: String },

    #[error("expected {expected} node names, found {found}")]
    MissingNodes { expected: usize, found: usize },
}
