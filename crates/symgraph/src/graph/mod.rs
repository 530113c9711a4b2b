//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`] / [`NodeRef`]: program entities and their traversal view
//! - [`Edge`]: directed, typed relations between nodes
//! - [`NodeType`] / [`EdgeType`]: classification masks
//! - [`NameHierarchy`]: qualified names
//! - [`Components`]: optional per-node metadata
//! - [`SymbolGraph`]: the arena that owns all of the above

mod component;
mod edge;
mod name;
mod node;
mod symbol_graph;
mod token;
mod types;

pub use component::{
    AbstractionType, ComponentKind, Components, TokenComponentAbstraction, TokenComponentConst,
    TokenComponentFilePath, TokenComponentStatic,
};
pub use edge::Edge;
pub use name::{NameHierarchy, DEFAULT_SEPARATOR};
pub use node::{Node, NodeRef};
pub use symbol_graph::SymbolGraph;
pub use token::{EdgeId, NodeId, Token, TokenId};
pub use types::{Direction, EdgeType, NodeType};
