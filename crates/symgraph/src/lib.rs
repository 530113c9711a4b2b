//! # symgraph
//!
//! The in-memory symbol graph behind a source-code indexer: typed nodes for
//! program entities, typed edges for the relations between them, and the
//! traversal and classification queries everything downstream relies on.
//!
//! ## Core Principles
//!
//! - **Parser Agnostic**: Bring your own parser, we hold the graph
//! - **Provisional Types**: A node may start as "undefined" and be upgraded
//!   once its definition is parsed
//! - **Single Owner**: The graph owns every node and edge; nodes refer to
//!   edges by id
//! - **Total Reads**: Traversal returns `Option`, never an error
//!
//! ## Architecture
//!
//! ```text
//! Parser / graph builder (external)
//!     ↓
//! Builder Helpers (convenience API)
//!     ↓
//! SymbolGraph (arena, containment checks, type upgrades)
//!     ↓
//! Node / Edge / NameHierarchy / Components
//! ```
//!
//! ## Example
//!
//! ```rust
//! use symgraph::{helpers, NodeType, SymbolGraph};
//!
//! let mut graph = SymbolGraph::new();
//! let ns = helpers::add_root(&mut graph, NodeType::NAMESPACE, "app");
//! let class = helpers::add_member(&mut graph, ns, NodeType::CLASS, "Widget").unwrap();
//!
//! let widget = graph.node(class).unwrap();
//! assert_eq!(widget.full_name(), "app::Widget");
//! assert_eq!(widget.parent_node().map(|p| p.id()), Some(ns));
//! assert_eq!(widget.last_parent_node().id(), ns);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;
pub mod helpers;

// Re-export main types
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{
    AbstractionType, ComponentKind, Components, Direction, Edge, EdgeId, EdgeType, NameHierarchy,
    Node, NodeId, NodeRef, NodeType, SymbolGraph, Token, TokenComponentAbstraction,
    TokenComponentConst, TokenComponentFilePath, TokenComponentStatic, TokenId,
    DEFAULT_SEPARATOR,
};
