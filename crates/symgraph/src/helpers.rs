//! Convenience helpers for graph builders.
//!
//! These wrap the [`SymbolGraph`] primitives for the common steps of an
//! indexing pass: registering files, nesting members under their container,
//! recording references and merging entities that are discovered twice.

use crate::error::{GraphError, Result};
use crate::graph::{
    EdgeId, EdgeType, NameHierarchy, NodeId, NodeType, SymbolGraph, TokenComponentFilePath,
};
use std::path::Path;
use std::sync::Arc;

/// Add a file node to the graph.
///
/// Creates a `FILE` node named by the path, with a file path component
/// attached.
///
/// # Returns
///
/// The ID of the created file node.
pub fn add_file(graph: &mut SymbolGraph, path: impl AsRef<Path>) -> Result<NodeId> {
    let path = path.as_ref();
    let name = NameHierarchy::from_segments(
        [path.to_string_lossy().into_owned()],
        graph.config().name_separator.clone(),
    );

    let file_id = graph.add_node(NodeType::FILE, name);
    graph.add_component_file_path(file_id, Arc::new(TokenComponentFilePath::new(path)))?;

    Ok(file_id)
}

/// Add a top-level node with a single-segment name.
///
/// # Returns
///
/// The ID of the created node.
pub fn add_root(graph: &mut SymbolGraph, node_type: NodeType, name: &str) -> NodeId {
    let name = NameHierarchy::from_segments([name], graph.config().name_separator.clone());
    graph.add_node(node_type, name)
}

/// Add a node nested inside `parent_id` and link it with a member edge.
///
/// The child's name hierarchy is the parent's with `name` appended.
///
/// # Returns
///
/// The ID of the created child node.
///
/// # Errors
///
/// Returns an error if the parent doesn't exist. No node is created in that
/// case.
pub fn add_member(
    graph: &mut SymbolGraph,
    parent_id: NodeId,
    node_type: NodeType,
    name: &str,
) -> Result<NodeId> {
    let hierarchy = graph.get_node(parent_id)?.name_hierarchy().child(name);
    let child_id = graph.add_node(node_type, hierarchy);

    // Auto-create member edge
    graph.add_edge(parent_id, child_id, EdgeType::MEMBER)?;

    Ok(child_id)
}

/// Record a non-containment relation between two nodes.
///
/// # Errors
///
/// Returns [`GraphError::InvalidOperation`] if `edge_type` includes
/// [`EdgeType::MEMBER`] (use [`add_member`] or [`SymbolGraph::add_edge`]),
/// or an error if either node doesn't exist.
pub fn add_reference(
    graph: &mut SymbolGraph,
    source_id: NodeId,
    target_id: NodeId,
    edge_type: EdgeType,
) -> Result<EdgeId> {
    if edge_type.contains(EdgeType::MEMBER) {
        return Err(GraphError::invalid(format!(
            "Reference {source_id} -> {target_id} cannot carry a member type"
        )));
    }
    graph.add_edge(source_id, target_id, edge_type)
}

/// Find the node carrying `name_hierarchy`'s full name and merge `node_type`
/// into it, or create the node if there is none.
///
/// Merging follows [`SymbolGraph::upgrade_node_type`], so a provisional
/// undefined node is upgraded in place and keeps its edges and components.
///
/// # Returns
///
/// The ID of the found or created node.
pub fn ensure_node(
    graph: &mut SymbolGraph,
    node_type: NodeType,
    name_hierarchy: NameHierarchy,
) -> Result<NodeId> {
    let existing = graph
        .find_node_by_full_name(&name_hierarchy.full_name())
        .map(|node| node.id());

    match existing {
        Some(id) => {
            graph.upgrade_node_type(id, node_type)?;
            Ok(id)
        }
        None => Ok(graph.add_node(node_type, name_hierarchy)),
    }
}

/// IDs of the direct children of a node, in insertion order.
pub fn children_of(graph: &SymbolGraph, node_id: NodeId) -> Result<Vec<NodeId>> {
    Ok(graph
        .node(node_id)?
        .child_nodes()
        .map(|child| child.id())
        .collect())
}

/// IDs of the containers of a node, nearest first. Empty for a root.
///
/// # Errors
///
/// Returns [`GraphError::ContainmentCycle`] if the walk does not terminate
/// within the number of nodes in the graph.
pub fn ancestors_of(graph: &SymbolGraph, node_id: NodeId) -> Result<Vec<NodeId>> {
    let mut ancestors = Vec::new();
    let mut current = graph.node(node_id)?;

    while let Some(parent) = current.parent_node() {
        if ancestors.len() >= graph.node_count() {
            return Err(GraphError::ContainmentCycle {
                node_id,
                steps: ancestors.len() + 1,
            });
        }
        ancestors.push(parent.id());
        current = parent;
    }

    Ok(ancestors)
}
