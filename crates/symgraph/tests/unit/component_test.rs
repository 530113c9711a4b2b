//! Unit tests for component attachment.

use std::path::Path;
use std::sync::Arc;
use symgraph::{
    AbstractionType, ComponentKind, NameHierarchy, NodeType, SymbolGraph,
    TokenComponentAbstraction, TokenComponentConst, TokenComponentFilePath, TokenComponentStatic,
};

fn method_graph() -> (SymbolGraph, u64) {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(
        NodeType::METHOD,
        NameHierarchy::with_default_separator(["Shape", "area"]),
    );
    (graph, id)
}

#[test]
fn test_new_node_has_no_components() {
    let (graph, id) = method_graph();
    let node = graph.get_node(id).unwrap();

    assert!(node.components().is_empty());
    assert!(node.component_abstraction().is_none());
    assert!(node.component_const().is_none());
    assert!(node.component_static().is_none());
    assert!(node.component_file_path().is_none());
}

#[test]
fn test_attach_each_component() {
    let (mut graph, id) = method_graph();

    graph
        .add_component_abstraction(
            id,
            Arc::new(TokenComponentAbstraction::new(AbstractionType::PureVirtual)),
        )
        .unwrap();
    graph
        .add_component_const(id, Arc::new(TokenComponentConst))
        .unwrap();
    graph
        .add_component_static(id, Arc::new(TokenComponentStatic))
        .unwrap();
    graph
        .add_component_file_path(id, Arc::new(TokenComponentFilePath::new("src/shape.h")))
        .unwrap();

    let node = graph.get_node(id).unwrap();
    assert_eq!(
        node.component_abstraction().map(|c| c.abstraction),
        Some(AbstractionType::PureVirtual)
    );
    assert!(node.component_const().is_some());
    assert!(node.component_static().is_some());
    assert_eq!(
        node.component_file_path().map(|c| c.path()),
        Some(Path::new("src/shape.h"))
    );
    assert_eq!(node.components().len(), 4);
}

#[test]
fn test_last_write_wins() {
    let (mut graph, id) = method_graph();

    graph
        .add_component_file_path(id, Arc::new(TokenComponentFilePath::new("old.h")))
        .unwrap();
    graph
        .add_component_file_path(id, Arc::new(TokenComponentFilePath::new("new.h")))
        .unwrap();

    let node = graph.get_node(id).unwrap();
    assert_eq!(
        node.component_file_path().map(|c| c.path()),
        Some(Path::new("new.h"))
    );
    assert_eq!(node.components().kinds(), vec![ComponentKind::FilePath]);
}

#[test]
fn test_component_shared_between_nodes() {
    let mut graph = SymbolGraph::new();
    let a = graph.add_node(NodeType::FIELD, NameHierarchy::with_default_separator(["S", "a"]));
    let b = graph.add_node(NodeType::FIELD, NameHierarchy::with_default_separator(["S", "b"]));
    let shared = Arc::new(TokenComponentStatic);

    graph.add_component_static(a, shared.clone()).unwrap();
    graph.add_component_static(b, shared.clone()).unwrap();

    assert_eq!(Arc::strong_count(&shared), 3);
    assert!(graph
        .get_node(a)
        .unwrap()
        .components()
        .has(ComponentKind::Static));
}

#[test]
fn test_components_survive_type_upgrade() {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(
        NodeType::UNDEFINED_VARIABLE,
        NameHierarchy::with_default_separator(["MAX"]),
    );
    graph
        .add_component_const(id, Arc::new(TokenComponentConst))
        .unwrap();

    graph
        .upgrade_node_type(id, NodeType::GLOBAL_VARIABLE)
        .unwrap();

    let node = graph.get_node(id).unwrap();
    assert!(node.is_type(NodeType::GLOBAL_VARIABLE));
    assert!(node.component_const().is_some());
}

#[test]
fn test_attach_to_missing_node() {
    let mut graph = SymbolGraph::new();
    assert!(graph
        .add_component_const(7, Arc::new(TokenComponentConst))
        .is_err());
}
