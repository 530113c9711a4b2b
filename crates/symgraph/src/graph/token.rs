//! Identity shared by nodes and edges.

/// Stable identity of a graph token (monotonic counter per graph).
pub type TokenId = u64;

/// Identifier of a node.
pub type NodeId = TokenId;

/// Identifier of an edge.
pub type EdgeId = TokenId;

/// Something that is either a node or an edge.
///
/// Exactly one of [`is_node`](Token::is_node) and [`is_edge`](Token::is_edge)
/// returns `true` for any implementor.
pub trait Token {
    /// Identity assigned at creation.
    fn id(&self) -> TokenId;

    /// True for nodes.
    fn is_node(&self) -> bool;

    /// True for edges.
    fn is_edge(&self) -> bool;
}
