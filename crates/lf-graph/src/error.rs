//! Graph-specific error types.
//!
//! Everything here is a configuration error in the sense of the pipeline
//! contract: the topology is malformed, the run aborts before any
//! computation and no partial graph is built.

use lf_core::{EdgeId, LfError, NodeId, Real};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Two nodes were registered under the same name.
    DuplicateNode { name: String },

    /// A topology edge references a name not present in any tier list.
    UnknownNode { name: String },

    /// An edge endpoint is not a node of this builder.
    NodeOutOfRange { node: NodeId },

    /// An edge connects tiers that are not adjacent
    /// (only Origin->Relay and Relay->Destination are allowed).
    TierMismatch { from: NodeId, to: NodeId },

    /// A supplied capacity is negative.
    NegativeCapacity {
        from: NodeId,
        to: NodeId,
        capacity: Real,
    },

    /// A supplied capacity is NaN or infinite.
    NonFiniteCapacity { from: NodeId, to: NodeId },

    /// A second edge between the same ordered pair.
    DuplicateEdge { from: NodeId, to: NodeId },

    /// An edge from a node to itself.
    SelfLoop { node: NodeId },

    /// Adjacency list is inconsistent (edge in a node's list but the edge
    /// doesn't reference that node).
    InconsistentAdjacency { edge: EdgeId, node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateNode { name } => {
                write!(f, "Node name {:?} registered twice", name)
            }
            GraphError::UnknownNode { name } => {
                write!(f, "Edge references unknown node {:?}", name)
            }
            GraphError::NodeOutOfRange { node } => {
                write!(f, "Edge endpoint {} is not a node of this graph", node)
            }
            GraphError::TierMismatch { from, to } => {
                write!(f, "Edge {} -> {} connects non-adjacent tiers", from, to)
            }
            GraphError::NegativeCapacity { from, to, capacity } => {
                write!(f, "Edge {} -> {} has negative capacity {}", from, to, capacity)
            }
            GraphError::NonFiniteCapacity { from, to } => {
                write!(f, "Edge {} -> {} has a non-finite capacity", from, to)
            }
            GraphError::DuplicateEdge { from, to } => {
                write!(f, "Duplicate edge between {} and {}", from, to)
            }
            GraphError::SelfLoop { node } => {
                write!(f, "Self loop on node {}", node)
            }
            GraphError::InconsistentAdjacency { edge, node } => {
                write!(
                    f,
                    "Edge {} in node {}'s adjacency list but doesn't reference that node",
                    edge, node
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for LfError {
    fn from(err: GraphError) -> Self {
        LfError::Invariant {
            what: Box::leak(err.to_string().into_boxed_str()),
        }
    }
}
