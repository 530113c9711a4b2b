//! Nodes of the symbol graph.
//!
//! [`Node`] is the stored record: identity, type mask, qualified name, the
//! ids of its incident edges and its optional components. Resolving those ids
//! needs the owning graph, so traversal lives on [`NodeRef`], a borrowed view
//! pairing a node with its [`SymbolGraph`].

use super::component::{
    Components, TokenComponentAbstraction, TokenComponentConst, TokenComponentFilePath,
    TokenComponentStatic,
};
use super::edge::Edge;
use super::name::NameHierarchy;
use super::symbol_graph::SymbolGraph;
use super::token::{EdgeId, NodeId, Token, TokenId};
use super::types::{Direction, EdgeType, NodeType};
use crate::error::{GraphError, Result};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A program entity in the symbol graph.
///
/// The id never changes after construction and the type mask is never empty.
/// Edges are not owned: the node only keeps the ids of its incident edges,
/// in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(deserialize_with = "super::types::non_empty_node_type")]
    node_type: NodeType,
    name_hierarchy: NameHierarchy,
    edges: Vec<EdgeId>,
    components: Components,
}

impl Node {
    /// Create a new node (ID is normally assigned by the graph).
    ///
    /// # Panics
    ///
    /// Panics if `node_type` is empty.
    pub fn new(id: NodeId, node_type: NodeType, name_hierarchy: NameHierarchy) -> Self {
        assert!(
            !node_type.is_empty(),
            "node {id} created with an empty type mask"
        );
        Self {
            id,
            node_type,
            name_hierarchy,
            edges: Vec::new(),
            components: Components::new(),
        }
    }

    /// Identity assigned at creation.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current type mask.
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Replace the type mask wholesale.
    ///
    /// No merging happens here: a builder upgrading an undefined node must
    /// clear the undefined bits itself (or use
    /// [`SymbolGraph::upgrade_node_type`]).
    ///
    /// # Panics
    ///
    /// Panics if `node_type` is empty.
    pub fn set_type(&mut self, node_type: NodeType) {
        assert!(
            !node_type.is_empty(),
            "node {} assigned an empty type mask",
            self.id
        );
        self.node_type = node_type;
    }

    /// True iff the type mask intersects `mask`.
    pub fn is_type(&self, mask: NodeType) -> bool {
        self.node_type.intersects(mask)
    }

    /// Last segment of the qualified name.
    pub fn name(&self) -> &str {
        self.name_hierarchy.name()
    }

    /// Qualified name joined by the hierarchy's separator.
    pub fn full_name(&self) -> String {
        self.name_hierarchy.full_name()
    }

    /// The qualified name.
    pub fn name_hierarchy(&self) -> &NameHierarchy {
        &self.name_hierarchy
    }

    /// Ids of incident edges, in insertion order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn remove_edge(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|id| *id == edge) {
            Some(index) => {
                self.edges.remove(index);
                true
            }
            None => false,
        }
    }

    /// Attach an abstraction record. A later call replaces the earlier record.
    pub fn add_component_abstraction(&mut self, component: Arc<TokenComponentAbstraction>) {
        if self.components.set_abstraction(component).is_some() {
            warn!("Node {} abstraction component replaced", self.id);
        }
    }

    /// Attach a const marker. A later call replaces the earlier record.
    pub fn add_component_const(&mut self, component: Arc<TokenComponentConst>) {
        if self.components.set_const(component).is_some() {
            warn!("Node {} const component replaced", self.id);
        }
    }

    /// Attach a static marker. A later call replaces the earlier record.
    pub fn add_component_static(&mut self, component: Arc<TokenComponentStatic>) {
        if self.components.set_static(component).is_some() {
            warn!("Node {} static component replaced", self.id);
        }
    }

    /// Attach a file path record. A later call replaces the earlier record.
    pub fn add_component_file_path(&mut self, component: Arc<TokenComponentFilePath>) {
        if self.components.set_file_path(component).is_some() {
            warn!("Node {} file path component replaced", self.id);
        }
    }

    /// All attached components.
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Attached abstraction record, if any.
    pub fn component_abstraction(&self) -> Option<&Arc<TokenComponentAbstraction>> {
        self.components.abstraction()
    }

    /// Attached const marker, if any.
    pub fn component_const(&self) -> Option<&Arc<TokenComponentConst>> {
        self.components.const_marker()
    }

    /// Attached static marker, if any.
    pub fn component_static(&self) -> Option<&Arc<TokenComponentStatic>> {
        self.components.static_marker()
    }

    /// Attached file path record, if any.
    pub fn component_file_path(&self) -> Option<&Arc<TokenComponentFilePath>> {
        self.components.file_path()
    }

    /// Human-readable type mask.
    pub fn type_string(&self) -> String {
        self.node_type.type_string()
    }

    /// Debug representation: `[id] type: "full name"`.
    pub fn as_string(&self) -> String {
        format!("[{}] {}: \"{}\"", self.id, self.type_string(), self.full_name())
    }
}

impl Token for Node {
    fn id(&self) -> TokenId {
        self.id
    }

    fn is_node(&self) -> bool {
        true
    }

    fn is_edge(&self) -> bool {
        false
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Borrowed view of a node inside its graph.
///
/// Every query that has to follow edge ids lives here. Visitors receive
/// shared borrows of the graph, so the edge collection cannot change while
/// it is being iterated.
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g SymbolGraph,
    node: &'g Node,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g SymbolGraph, node: &'g Node) -> Self {
        Self { graph, node }
    }

    /// The owning graph.
    pub fn graph(&self) -> &'g SymbolGraph {
        self.graph
    }

    /// The underlying record.
    pub fn node(&self) -> &'g Node {
        self.node
    }

    /// Incident edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &'g Edge> + 'g {
        let graph = self.graph;
        self.node
            .edges
            .iter()
            .filter_map(move |id| graph.get_edge(*id).ok())
    }

    /// Incident edges seen from this node in `direction`.
    pub fn edges_in(&self, direction: Direction) -> impl Iterator<Item = &'g Edge> + 'g {
        let id = self.node.id;
        self.edges().filter(move |edge| match direction {
            Direction::Outgoing => edge.source_id == id,
            Direction::Incoming => edge.target_id == id,
            Direction::Both => true,
        })
    }

    /// First edge satisfying `predicate`.
    pub fn find_edge<F>(&self, mut predicate: F) -> Option<&'g Edge>
    where
        F: FnMut(&Edge) -> bool,
    {
        self.edges().find(|edge| predicate(edge))
    }

    /// First edge whose type intersects `mask`.
    pub fn find_edge_of_type(&self, mask: EdgeType) -> Option<&'g Edge> {
        self.find_edge(|edge| edge.is_type(mask))
    }

    /// First edge whose type intersects `mask` and that satisfies `predicate`.
    pub fn find_edge_of_type_where<F>(&self, mask: EdgeType, mut predicate: F) -> Option<&'g Edge>
    where
        F: FnMut(&Edge) -> bool,
    {
        self.find_edge(|edge| edge.is_type(mask) && predicate(edge))
    }

    /// Call `visitor` for every incident edge.
    pub fn for_each_edge<F>(&self, visitor: F)
    where
        F: FnMut(&'g Edge),
    {
        self.edges().for_each(visitor);
    }

    /// Call `visitor` for every incident edge whose type intersects `mask`.
    pub fn for_each_edge_of_type<F>(&self, mask: EdgeType, visitor: F)
    where
        F: FnMut(&'g Edge),
    {
        self.edges().filter(|edge| edge.is_type(mask)).for_each(visitor);
    }

    /// The incoming member edge, i.e. the link to this node's container.
    pub fn member_edge(&self) -> Option<&'g Edge> {
        self.edges_in(Direction::Incoming)
            .find(|edge| edge.is_member())
    }

    /// Container of this node, or `None` for a root.
    pub fn parent_node(&self) -> Option<NodeRef<'g>> {
        let edge = self.member_edge()?;
        self.graph.node(edge.source_id).ok()
    }

    /// Outermost container reached by following [`parent_node`](Self::parent_node).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ContainmentCycle`] if the walk takes more steps
    /// than there are nodes in the graph.
    pub fn try_last_parent_node(&self) -> Result<NodeRef<'g>> {
        let bound = self.graph.node_count();
        let mut current = *self;
        let mut steps = 0;

        while let Some(parent) = current.parent_node() {
            steps += 1;
            if steps > bound {
                return Err(GraphError::ContainmentCycle {
                    node_id: self.node.id,
                    steps,
                });
            }
            trace!("Node {} walking up to {}", current.node.id, parent.node.id);
            current = parent;
        }

        Ok(current)
    }

    /// Outermost container reached by following [`parent_node`](Self::parent_node).
    /// Returns this node if it has no container.
    ///
    /// # Panics
    ///
    /// Panics on a containment cycle. The graph guards against cycles when
    /// member edges are added, so reaching one means the graph is corrupt.
    pub fn last_parent_node(&self) -> NodeRef<'g> {
        match self.try_last_parent_node() {
            Ok(root) => root,
            Err(err) => panic!("{err}"),
        }
    }

    /// Direct children: targets of outgoing member edges, in insertion order.
    pub fn child_nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + 'g {
        let graph = self.graph;
        self.edges_in(Direction::Outgoing)
            .filter(|edge| edge.is_member())
            .filter_map(move |edge| graph.node(edge.target_id).ok())
    }

    /// First direct child satisfying `predicate`.
    pub fn find_child_node<F>(&self, mut predicate: F) -> Option<NodeRef<'g>>
    where
        F: FnMut(NodeRef<'g>) -> bool,
    {
        self.child_nodes().find(|child| predicate(*child))
    }

    /// Call `visitor` for every direct child.
    pub fn for_each_child_node<F>(&self, visitor: F)
    where
        F: FnMut(NodeRef<'g>),
    {
        self.child_nodes().for_each(visitor);
    }

    /// True iff at least one incident edge is not a containment edge.
    pub fn has_references(&self) -> bool {
        self.find_edge_of_type(EdgeType::REFERENCE_MASK).is_some()
    }
}

impl<'g> std::ops::Deref for NodeRef<'g> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.node.id == other.node.id
    }
}

impl Eq for NodeRef<'_> {}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeRef").field(self.node).finish()
    }
}

impl std::fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node)
    }
}
