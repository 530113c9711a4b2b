//! Basic usage example for symgraph
//!
//! This example demonstrates:
//! - Building a graph from two indexing passes
//! - Upgrading an undefined symbol once its definition is seen
//! - Walking containment and reference edges

use std::sync::Arc;
use symgraph::helpers;
use symgraph::{
    AbstractionType, EdgeType, NameHierarchy, NodeType, SymbolGraph, TokenComponentAbstraction,
};

fn main() -> symgraph::Result<()> {
    let mut graph = SymbolGraph::new();

    println!("Indexing main.cpp...\n");

    let file_id = helpers::add_file(&mut graph, "src/main.cpp")?;
    println!("✓ Added file: src/main.cpp (ID: {file_id})");

    let main_id = helpers::add_root(&mut graph, NodeType::FUNCTION, "main");
    println!("✓ Added function: main (ID: {main_id})");

    // `draw` is called before its declaration is parsed
    let draw_id = helpers::ensure_node(
        &mut graph,
        NodeType::UNDEFINED_FUNCTION,
        NameHierarchy::with_default_separator(["gfx", "Canvas", "draw"]),
    )?;
    helpers::add_reference(&mut graph, main_id, draw_id, EdgeType::CALL)?;
    println!("✓ Added undefined function: gfx::Canvas::draw (ID: {draw_id})");

    println!("\nIndexing canvas.h...\n");

    let gfx_id = helpers::add_root(&mut graph, NodeType::NAMESPACE, "gfx");
    let canvas_id = helpers::add_member(&mut graph, gfx_id, NodeType::CLASS, "Canvas")?;
    let draw_again = helpers::ensure_node(
        &mut graph,
        NodeType::METHOD,
        NameHierarchy::with_default_separator(["gfx", "Canvas", "draw"]),
    )?;
    graph.add_edge(canvas_id, draw_again, EdgeType::MEMBER)?;
    graph.add_component_abstraction(
        draw_again,
        Arc::new(TokenComponentAbstraction::new(AbstractionType::Virtual)),
    )?;
    println!("✓ Upgraded gfx::Canvas::draw in place (ID: {draw_again})");

    println!("\nQuerying...\n");

    let draw = graph.node(draw_id)?;
    println!("draw:        {draw}");
    if let Some(parent) = draw.parent_node() {
        println!("container:   {parent}");
    }
    println!("outermost:   {}", draw.last_parent_node());
    println!("referenced:  {}", draw.has_references());

    draw.for_each_edge(|edge| println!("  edge {edge}"));

    println!("\nRoots:");
    for root in graph.root_nodes() {
        println!("  {root}");
    }

    println!(
        "\nGraph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(())
}
