//! Unit tests for graph-level operations (add/delete, containment checks,
//! type upgrades, lookups).

use symgraph::{EdgeType, GraphError, NameHierarchy, NodeType, SymbolGraph};

fn name(segments: &[&str]) -> NameHierarchy {
    NameHierarchy::with_default_separator(segments.iter().copied())
}

#[test]
fn test_add_node() {
    let mut graph = SymbolGraph::new();

    let node_id = graph.add_node(NodeType::FUNCTION, name(&["test_func"]));

    assert_eq!(node_id, 0); // First token should have ID 0
    assert_eq!(graph.node_count(), 1);
    let node = graph.get_node(node_id).unwrap();
    assert_eq!(node.node_type(), NodeType::FUNCTION);
    assert_eq!(node.name(), "test_func");
}

#[test]
fn test_get_nonexistent_node() {
    let graph = SymbolGraph::new();

    assert_eq!(
        graph.get_node(999).err(),
        Some(GraphError::NodeNotFound { node_id: 999 })
    );
    assert!(graph.node(999).is_err());
}

#[test]
#[should_panic(expected = "empty type mask")]
fn test_add_node_with_empty_type_panics() {
    let mut graph = SymbolGraph::new();
    graph.add_node(NodeType::empty(), name(&["nothing"]));
}

#[test]
fn test_second_container_rejected() {
    let mut graph = SymbolGraph::new();
    let a = graph.add_node(NodeType::NAMESPACE, name(&["a"]));
    let b = graph.add_node(NodeType::NAMESPACE, name(&["b"]));
    let c = graph.add_node(NodeType::CLASS, name(&["a", "C"]));

    graph.add_edge(a, c, EdgeType::MEMBER).unwrap();
    let result = graph.add_edge(b, c, EdgeType::MEMBER);

    assert!(matches!(result, Err(GraphError::InvalidOperation { .. })));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.get_node(b).unwrap().edges().is_empty());
}

#[test]
fn test_containment_cycle_rejected() {
    let mut graph = SymbolGraph::new();
    let a = graph.add_node(NodeType::NAMESPACE, name(&["a"]));
    let b = graph.add_node(NodeType::NAMESPACE, name(&["a", "b"]));
    let c = graph.add_node(NodeType::NAMESPACE, name(&["a", "b", "c"]));
    graph.add_edge(a, b, EdgeType::MEMBER).unwrap();
    graph.add_edge(b, c, EdgeType::MEMBER).unwrap();

    let result = graph.add_edge(c, a, EdgeType::MEMBER);
    assert!(matches!(result, Err(GraphError::InvalidOperation { .. })));

    let self_member = graph.add_edge(a, a, EdgeType::MEMBER);
    assert!(matches!(self_member, Err(GraphError::InvalidOperation { .. })));

    // Non-member edges may point anywhere
    assert!(graph.add_edge(c, a, EdgeType::USAGE).is_ok());
}

#[test]
fn test_try_last_parent_reports_cycle_in_lenient_graph() {
    let mut graph = SymbolGraph::with_config(symgraph::GraphConfig::lenient());
    let a = graph.add_node(NodeType::NAMESPACE, name(&["a"]));
    let b = graph.add_node(NodeType::NAMESPACE, name(&["b"]));
    graph.add_edge(a, b, EdgeType::MEMBER).unwrap();
    graph.add_edge(b, a, EdgeType::MEMBER).unwrap();

    let result = graph.node(a).unwrap().try_last_parent_node();
    assert!(matches!(
        result,
        Err(GraphError::ContainmentCycle { node_id, .. }) if node_id == a
    ));
}

#[test]
#[should_panic(expected = "Containment cycle")]
fn test_last_parent_panics_on_cycle() {
    let mut graph = SymbolGraph::with_config(symgraph::GraphConfig::lenient());
    let a = graph.add_node(NodeType::NAMESPACE, name(&["a"]));
    let b = graph.add_node(NodeType::NAMESPACE, name(&["b"]));
    graph.add_edge(a, b, EdgeType::MEMBER).unwrap();
    graph.add_edge(b, a, EdgeType::MEMBER).unwrap();

    graph.node(b).unwrap().last_parent_node();
}

#[test]
fn test_delete_node_removes_incident_edges() {
    let mut graph = SymbolGraph::new();
    let class = graph.add_node(NodeType::CLASS, name(&["C"]));
    let method = graph.add_node(NodeType::METHOD, name(&["C", "m"]));
    let caller = graph.add_node(NodeType::FUNCTION, name(&["main"]));
    graph.add_edge(class, method, EdgeType::MEMBER).unwrap();
    graph.add_edge(caller, method, EdgeType::CALL).unwrap();

    graph.delete_node(method).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.get_node(class).unwrap().edges().is_empty());
    assert!(graph.get_node(caller).unwrap().edges().is_empty());
    assert!(graph.delete_node(method).is_err());
}

#[test]
fn test_upgrade_undefined_to_defined() {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(NodeType::UNDEFINED_FUNCTION, name(&["run"]));

    let merged = graph.upgrade_node_type(id, NodeType::FUNCTION).unwrap();

    assert_eq!(merged, NodeType::FUNCTION);
    let node = graph.get_node(id).unwrap();
    assert!(node.is_type(NodeType::DEFINED_MASK));
    assert!(!node.is_type(NodeType::UNDEFINED_MASK));
}

#[test]
fn test_upgrade_never_regresses_to_undefined() {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(NodeType::CLASS, name(&["C"]));

    let merged = graph.upgrade_node_type(id, NodeType::UNDEFINED_TYPE).unwrap();

    assert_eq!(merged, NodeType::CLASS);
    assert!(!graph.get_node(id).unwrap().is_type(NodeType::UNDEFINED_MASK));
}

#[test]
fn test_upgrade_between_undefined_kinds_replaces() {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(NodeType::UNDEFINED, name(&["x"]));

    let merged = graph
        .upgrade_node_type(id, NodeType::UNDEFINED_VARIABLE)
        .unwrap();
    assert_eq!(merged, NodeType::UNDEFINED_VARIABLE);
}

#[test]
fn test_upgrade_accumulates_defined_kinds() {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(NodeType::UNDEFINED_TYPE, name(&["S"]));

    graph.upgrade_node_type(id, NodeType::CLASS).unwrap();
    let merged = graph.upgrade_node_type(id, NodeType::STRUCT).unwrap();

    assert_eq!(merged, NodeType::STRUCT | NodeType::CLASS);
}

#[test]
fn test_upgrade_keeps_edges() {
    let mut graph = SymbolGraph::new();
    let ns = graph.add_node(NodeType::NAMESPACE, name(&["ns"]));
    let id = graph.add_node(NodeType::UNDEFINED_TYPE, name(&["ns", "T"]));
    let member = graph.add_edge(ns, id, EdgeType::MEMBER).unwrap();

    graph.upgrade_node_type(id, NodeType::CLASS).unwrap();

    assert_eq!(graph.get_node(id).unwrap().edges(), [member]);
    assert_eq!(
        graph.node(id).unwrap().parent_node().map(|p| p.id()),
        Some(ns)
    );
}

#[test]
fn test_find_node_by_full_name() {
    let mut graph = SymbolGraph::new();
    let id = graph.add_node(NodeType::CLASS, name(&["std", "vector"]));

    assert_eq!(
        graph.find_node_by_full_name("std::vector").map(|n| n.id()),
        Some(id)
    );
    assert!(graph.find_node_by_full_name("std::map").is_none());
}

#[test]
fn test_root_nodes() {
    let mut graph = SymbolGraph::new();
    let ns = graph.add_node(NodeType::NAMESPACE, name(&["ns"]));
    let class = graph.add_node(NodeType::CLASS, name(&["ns", "C"]));
    let file = graph.add_node(NodeType::FILE, name(&["main.cpp"]));
    graph.add_edge(ns, class, EdgeType::MEMBER).unwrap();

    let roots: Vec<_> = graph.root_nodes().map(|n| n.id()).collect();
    assert_eq!(roots, vec![ns, file]);
}

#[test]
fn test_nodes_and_edges_iterate_in_id_order() {
    let mut graph = SymbolGraph::new();
    let a = graph.add_node(NodeType::FUNCTION, name(&["a"]));
    let b = graph.add_node(NodeType::FUNCTION, name(&["b"]));
    let e = graph.add_edge(a, b, EdgeType::CALL).unwrap();

    let nodes: Vec<_> = graph.nodes().map(|n| n.id()).collect();
    let edges: Vec<_> = graph.edges().map(|e| e.id()).collect();
    assert_eq!(nodes, vec![a, b]);
    assert_eq!(edges, vec![e]);
}

#[test]
fn test_mutators_keep_identity_edges_and_index() {
    let mut graph = SymbolGraph::new();
    let a = graph.add_node(NodeType::UNDEFINED_TYPE, name(&["a"]));
    let c = graph.add_node(NodeType::CLASS, name(&["c"]));
    let edge = graph.add_edge(a, c, EdgeType::USAGE).unwrap();

    graph.set_node_type(c, NodeType::STRUCT).unwrap();
    graph.upgrade_node_type(a, NodeType::CLASS).unwrap();

    for id in [a, c] {
        let node = graph.get_node(id).unwrap();
        assert_eq!(node.id(), id);
        assert_eq!(node.edges().to_vec(), vec![edge]);
        assert!(graph.get_edge(edge).unwrap().touches(id));
    }
    assert_eq!(graph.find_node_by_full_name("c").map(|n| n.id()), Some(c));
    assert_eq!(graph.find_node_by_full_name("a").map(|n| n.id()), Some(a));

    // A cloned record is detached from the graph
    let mut copy = graph.get_node(a).unwrap().clone();
    copy.set_type(NodeType::ENUM);
    assert_eq!(graph.get_node(a).unwrap().node_type(), NodeType::CLASS);
}
