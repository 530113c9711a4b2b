//! The symbol graph: owner of every node and edge.

use super::component::{
    TokenComponentAbstraction, TokenComponentConst, TokenComponentFilePath, TokenComponentStatic,
};
use super::edge::Edge;
use super::name::NameHierarchy;
use super::node::{Node, NodeRef};
use super::token::{EdgeId, NodeId, TokenId};
use super::types::{EdgeType, NodeType};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// In-memory symbol graph.
///
/// `SymbolGraph` is the arena behind the node/edge model: it owns every
/// [`Node`] and [`Edge`], hands out ids from one monotonic counter and keeps
/// both endpoints of an edge in sync when edges come and go.
///
/// The graph is built by a single writer through `&mut self`; once built,
/// shared `&SymbolGraph` borrows can be traversed from any number of readers.
///
/// Stored records are never handed out mutably:
///
/// ```compile_fail
/// use symgraph::{NameHierarchy, NodeType, SymbolGraph};
///
/// let mut graph = SymbolGraph::new();
/// let a = graph.add_node(NodeType::CLASS, NameHierarchy::with_default_separator(["a"]));
/// let b = graph.add_node(NodeType::CLASS, NameHierarchy::with_default_separator(["b"]));
/// let copy = graph.get_node(a).unwrap().clone();
/// *graph.get_node_mut(b).unwrap() = copy;
/// ```
#[derive(Debug, Default)]
pub struct SymbolGraph {
    config: GraphConfig,
    // Shared by nodes and edges so token ids never collide
    token_counter: TokenId,
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    // Full name -> lowest node id carrying it
    full_names: HashMap<String, NodeId>,
}

impl SymbolGraph {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Add a node to the graph.
    ///
    /// # Returns
    ///
    /// The unique ID assigned to the created node.
    ///
    /// # Panics
    ///
    /// Panics if `node_type` is empty.
    pub fn add_node(&mut self, node_type: NodeType, name_hierarchy: NameHierarchy) -> NodeId {
        let node_id = self.next_token_id();
        debug!("Adding node: id={node_id}, type={node_type}, name={name_hierarchy}");
        let node = Node::new(node_id, node_type, name_hierarchy);

        if self.config.index_full_names {
            self.full_names.entry(node.full_name()).or_insert(node_id);
        }

        self.nodes.insert(node_id, node);
        node_id
    }

    /// Get a traversal view of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_>> {
        self.get_node(id).map(|node| NodeRef::new(self, node))
    }

    /// Get a node record by ID (immutable).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(&id)
            .ok_or(GraphError::NodeNotFound { node_id: id })
    }

    /// Mutable access to a stored record. Callers outside the graph go through
    /// the targeted mutators so ids, edge lists and the name index stay in sync.
    pub(crate) fn get_node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(&id)
            .ok_or(GraphError::NodeNotFound { node_id: id })
    }

    /// Get an edge by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn get_edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges
            .get(&id)
            .ok_or(GraphError::EdgeNotFound { edge_id: id })
    }

    /// Add an edge and register it on both endpoints.
    ///
    /// With [`GraphConfig::enforce_containment`] set, a member edge is refused
    /// if the target already has a container or if the edge would close a
    /// containment cycle.
    ///
    /// # Returns
    ///
    /// The unique ID assigned to the created edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if an endpoint doesn't exist, or
    /// [`GraphError::InvalidOperation`] if the containment checks fail.
    ///
    /// # Panics
    ///
    /// Panics if `edge_type` is empty.
    pub fn add_edge(
        &mut self,
        source_id: NodeId,
        target_id: NodeId,
        edge_type: EdgeType,
    ) -> Result<EdgeId> {
        debug!("Adding edge: source={source_id}, target={target_id}, type={edge_type}");
        // Verify nodes exist
        self.get_node(source_id)?;
        self.get_node(target_id)?;

        if edge_type.contains(EdgeType::MEMBER) && self.config.enforce_containment {
            self.check_member_edge(source_id, target_id)?;
        }

        let edge_id = self.next_token_id();
        let edge = Edge::new(edge_id, edge_type, source_id, target_id);
        self.edges.insert(edge_id, edge);

        self.get_node_mut(source_id)?.add_edge(edge_id);
        if target_id != source_id {
            self.get_node_mut(target_id)?.add_edge(edge_id);
        }

        trace!("Edge {edge_id} registered on its endpoints");
        Ok(edge_id)
    }

    /// Register an existing edge on one of its endpoints.
    ///
    /// The id is appended without de-duplication: attaching twice yields two
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] or [`GraphError::EdgeNotFound`]
    /// for unknown ids, and [`GraphError::InvalidOperation`] if the node is
    /// not an endpoint of the edge.
    pub fn attach_edge(&mut self, node_id: NodeId, edge_id: EdgeId) -> Result<()> {
        let edge = self.get_edge(edge_id)?;
        if !edge.touches(node_id) {
            return Err(GraphError::invalid(format!(
                "Edge {edge_id} does not touch node {node_id}"
            )));
        }

        self.get_node_mut(node_id)?.add_edge(edge_id);
        trace!("Edge {edge_id} attached to node {node_id}");
        Ok(())
    }

    /// Remove the first registration of `edge_id` from a node.
    ///
    /// Detaching an edge the node does not hold is a no-op. The edge itself
    /// stays in the graph; see [`delete_edge`](Self::delete_edge).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn detach_edge(&mut self, node_id: NodeId, edge_id: EdgeId) -> Result<()> {
        if self.get_node_mut(node_id)?.remove_edge(edge_id) {
            trace!("Edge {edge_id} detached from node {node_id}");
        }
        Ok(())
    }

    /// Delete an edge, removing it from both endpoints first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn delete_edge(&mut self, id: EdgeId) -> Result<()> {
        debug!("Deleting edge: id={id}");
        let edge = self.get_edge(id)?;
        let source_id = edge.source_id;
        let target_id = edge.target_id;

        for endpoint in [source_id, target_id] {
            if let Some(node) = self.nodes.get_mut(&endpoint) {
                while node.remove_edge(id) {}
            }
        }

        self.edges.remove(&id);
        Ok(())
    }

    /// Delete a node and all its incident edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn delete_node(&mut self, id: NodeId) -> Result<()> {
        debug!("Deleting node: id={id}");
        let mut incident: Vec<EdgeId> = self.get_node(id)?.edges().to_vec();
        incident.dedup();

        trace!("Deleting {} connected edges for node {}", incident.len(), id);
        for edge_id in incident {
            if self.edges.contains_key(&edge_id) {
                self.delete_edge(edge_id)?;
            }
        }

        if let Some(node) = self.nodes.remove(&id) {
            self.unindex_full_name(&node);
        }
        Ok(())
    }

    /// Replace a node's type mask wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    ///
    /// # Panics
    ///
    /// Panics if `node_type` is empty.
    pub fn set_node_type(&mut self, id: NodeId, node_type: NodeType) -> Result<()> {
        self.get_node_mut(id)?.set_type(node_type);
        Ok(())
    }

    /// Merge a newly observed classification into a node, defined kinds
    /// taking precedence over undefined ones.
    ///
    /// - A defined `incoming` clears every undefined bit and is added to the
    ///   defined kinds already present.
    /// - An undefined `incoming` is ignored once the node is defined, and
    ///   replaces the mask otherwise.
    ///
    /// Edges and components gathered in earlier passes are kept.
    ///
    /// # Returns
    ///
    /// The resulting type mask.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    ///
    /// # Panics
    ///
    /// Panics if `incoming` is empty.
    pub fn upgrade_node_type(&mut self, id: NodeId, incoming: NodeType) -> Result<NodeType> {
        assert!(!incoming.is_empty(), "node {id} upgraded with an empty type mask");
        let node = self.get_node_mut(id)?;
        let current = node.node_type();

        let merged = if incoming.is_defined() {
            (current | incoming).difference(NodeType::UNDEFINED_MASK)
        } else if current.is_defined() {
            current
        } else {
            incoming
        };

        if merged != current {
            debug!("Node {id} type changed: {current} -> {merged}");
            node.set_type(merged);
        }
        Ok(merged)
    }

    /// Attach an abstraction record to a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn add_component_abstraction(
        &mut self,
        id: NodeId,
        component: Arc<TokenComponentAbstraction>,
    ) -> Result<()> {
        self.get_node_mut(id)?.add_component_abstraction(component);
        Ok(())
    }

    /// Attach a const marker to a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn add_component_const(&mut self, id: NodeId, component: Arc<TokenComponentConst>) -> Result<()> {
        self.get_node_mut(id)?.add_component_const(component);
        Ok(())
    }

    /// Attach a static marker to a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn add_component_static(
        &mut self,
        id: NodeId,
        component: Arc<TokenComponentStatic>,
    ) -> Result<()> {
        self.get_node_mut(id)?.add_component_static(component);
        Ok(())
    }

    /// Attach a file path record to a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn add_component_file_path(
        &mut self,
        id: NodeId,
        component: Arc<TokenComponentFilePath>,
    ) -> Result<()> {
        self.get_node_mut(id)?.add_component_file_path(component);
        Ok(())
    }

    /// Find a node by its qualified name. With several matches the lowest id
    /// wins.
    pub fn find_node_by_full_name(&self, full_name: &str) -> Option<NodeRef<'_>> {
        if self.config.index_full_names {
            return self
                .full_names
                .get(full_name)
                .and_then(|id| self.node(*id).ok());
        }
        self.nodes()
            .find(|node| node.name_hierarchy().full_name() == full_name)
    }

    /// All nodes, in id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes.values().map(move |node| NodeRef::new(self, node))
    }

    /// All edges, in id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Nodes without a container, in id order.
    pub fn root_nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes().filter(|node| node.member_edge().is_none())
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove every node and edge. The id counter keeps running so ids are
    /// never reused by the same graph.
    pub fn clear(&mut self) {
        debug!(
            "Clearing graph: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.edges.clear();
        self.full_names.clear();
    }

    // Private helper methods

    fn next_token_id(&mut self) -> TokenId {
        let id = self.token_counter;
        self.token_counter += 1;
        id
    }

    fn check_member_edge(&self, source_id: NodeId, target_id: NodeId) -> Result<()> {
        if source_id == target_id {
            return Err(GraphError::invalid(format!(
                "Node {source_id} cannot contain itself"
            )));
        }

        let target = self.node(target_id)?;
        if let Some(existing) = target.member_edge() {
            return Err(GraphError::invalid(format!(
                "Node {target_id} already has container {} (edge {})",
                existing.source_id,
                existing.id()
            )));
        }

        // Walk up from the source; meeting the target would close a cycle
        let mut current = self.node(source_id)?;
        let mut steps = 0;
        while let Some(parent) = current.parent_node() {
            steps += 1;
            if parent.id() == target_id {
                return Err(GraphError::invalid(format!(
                    "Member edge {source_id} -> {target_id} would create a containment cycle"
                )));
            }
            if steps > self.nodes.len() {
                return Err(GraphError::ContainmentCycle {
                    node_id: source_id,
                    steps,
                });
            }
            current = parent;
        }

        Ok(())
    }

    fn unindex_full_name(&mut self, removed: &Node) {
        if !self.config.index_full_names {
            return;
        }

        let full_name = removed.full_name();
        if self.full_names.get(&full_name) != Some(&removed.id()) {
            return;
        }

        let replacement = self
            .nodes
            .values()
            .find(|node| node.full_name() == full_name)
            .map(Node::id);

        match replacement {
            Some(id) => {
                self.full_names.insert(full_name, id);
            }
            None => {
                self.full_names.remove(&full_name);
            }
        }
    }
}
