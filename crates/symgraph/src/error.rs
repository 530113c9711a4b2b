//! Error types for symbol graph operations.
//!
//! Fallible builder operations return [`Result<T>`]. Read-side traversal never
//! fails: absence is reported through `Option`.

use crate::graph::{EdgeId, NodeId};
use thiserror::Error;

/// Result type alias for symbol graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: NodeId,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: EdgeId,
    },

    /// Invalid operation (e.g., a second container for a node)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Integer value that does not map to a node type mask
    #[error("Invalid node type value: {value:#x}")]
    InvalidNodeType {
        /// Raw value that was rejected
        value: i32,
    },

    /// Walking member edges towards the root did not terminate
    #[error("Containment cycle detected at node {node_id} after {steps} steps")]
    ContainmentCycle {
        /// Node the walk started from
        node_id: NodeId,
        /// Steps taken before giving up
        steps: usize,
    },
}

impl GraphError {
    /// Create an invalid operation error from a message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}
