//! Directed, typed relations between nodes.

use super::token::{EdgeId, NodeId, Token, TokenId};
use super::types::EdgeType;
use serde::{Deserialize, Serialize};

/// A directed edge in the symbol graph.
///
/// Edges are owned by the [`SymbolGraph`](super::SymbolGraph) that created
/// them; both endpoint nodes only hold the edge's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    /// Kind of relationship
    #[serde(deserialize_with = "super::types::non_empty_edge_type")]
    pub edge_type: EdgeType,
    /// Source node ID
    pub source_id: NodeId,
    /// Target node ID
    pub target_id: NodeId,
}

impl Edge {
    /// Create a new edge (ID is normally assigned by the graph).
    ///
    /// # Panics
    ///
    /// Panics if `edge_type` is empty.
    pub fn new(id: EdgeId, edge_type: EdgeType, source_id: NodeId, target_id: NodeId) -> Self {
        assert!(!edge_type.is_empty(), "edge {id} created with an empty type mask");
        Self {
            id,
            edge_type,
            source_id,
            target_id,
        }
    }

    /// Identity assigned at creation.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// True iff the edge type intersects `mask`.
    pub fn is_type(&self, mask: EdgeType) -> bool {
        self.edge_type.intersects(mask)
    }

    /// True for containment edges.
    pub fn is_member(&self) -> bool {
        self.is_type(EdgeType::MEMBER)
    }

    /// True if `node` is the source or the target.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source_id == node || self.target_id == node
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.source_id == node {
            Some(self.target_id)
        } else if self.target_id == node {
            Some(self.source_id)
        } else {
            None
        }
    }

    /// Human-readable edge type.
    pub fn type_string(&self) -> String {
        self.edge_type.type_string()
    }

    /// Debug representation: `[id] type: source -> target`.
    pub fn as_string(&self) -> String {
        format!(
            "[{}] {}: {} -> {}",
            self.id,
            self.type_string(),
            self.source_id,
            self.target_id
        )
    }
}

impl Token for Edge {
    fn id(&self) -> TokenId {
        self.id
    }

    fn is_node(&self) -> bool {
        false
    }

    fn is_edge(&self) -> bool {
        true
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
