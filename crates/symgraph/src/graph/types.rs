//! Classification masks for nodes and edges.
//!
//! A node may carry several kinds at once (or a provisional "undefined" kind
//! until the parser has seen its definition), so both [`NodeType`] and
//! [`EdgeType`] are bit sets rather than plain enums.

use crate::error::{GraphError, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of kinds a node is currently known to be.
    ///
    /// Undefined placeholders occupy the lowest bits so that a defined kind
    /// always compares higher than, and is expected to replace, an undefined
    /// one for the same entity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct NodeType: u32 {
        /// Referenced symbol whose kind is not known yet
        const UNDEFINED = 0x1;
        /// Referenced as a type but never defined
        const UNDEFINED_TYPE = 0x2;
        /// Referenced as a variable but never defined
        const UNDEFINED_VARIABLE = 0x4;
        /// Referenced as a function but never defined
        const UNDEFINED_FUNCTION = 0x8;

        /// Struct definition
        const STRUCT = 0x10;
        /// Class definition
        const CLASS = 0x20;
        /// Variable at namespace or file scope
        const GLOBAL_VARIABLE = 0x40;
        /// Data member of a struct or class
        const FIELD = 0x80;
        /// Free function
        const FUNCTION = 0x100;
        /// Member function
        const METHOD = 0x200;
        /// Namespace, module or package
        const NAMESPACE = 0x400;
        /// Enumeration
        const ENUM = 0x800;
        /// Enumerator inside an enumeration
        const ENUM_CONSTANT = 0x1000;
        /// Type alias
        const TYPEDEF = 0x2000;
        /// Template (generic) type parameter
        const TEMPLATE_PARAMETER_TYPE = 0x4000;

        /// Source file
        const FILE = 0x8000;
        /// Preprocessor macro
        const MACRO = 0x10000;
    }
}

const NODE_KIND_NAMES: [(NodeType, &str); 17] = [
    (NodeType::UNDEFINED, "undefined"),
    (NodeType::UNDEFINED_TYPE, "undefined type"),
    (NodeType::UNDEFINED_VARIABLE, "undefined variable"),
    (NodeType::UNDEFINED_FUNCTION, "undefined function"),
    (NodeType::STRUCT, "struct"),
    (NodeType::CLASS, "class"),
    (NodeType::GLOBAL_VARIABLE, "global variable"),
    (NodeType::FIELD, "field"),
    (NodeType::FUNCTION, "function"),
    (NodeType::METHOD, "method"),
    (NodeType::NAMESPACE, "namespace"),
    (NodeType::ENUM, "enum"),
    (NodeType::ENUM_CONSTANT, "enum constant"),
    (NodeType::TYPEDEF, "typedef"),
    (NodeType::TEMPLATE_PARAMETER_TYPE, "template parameter type"),
    (NodeType::FILE, "file"),
    (NodeType::MACRO, "macro"),
];

impl NodeType {
    /// Every undefined placeholder kind.
    pub const UNDEFINED_MASK: Self = Self::UNDEFINED
        .union(Self::UNDEFINED_TYPE)
        .union(Self::UNDEFINED_VARIABLE)
        .union(Self::UNDEFINED_FUNCTION);

    /// Every defined kind.
    pub const DEFINED_MASK: Self = Self::all().difference(Self::UNDEFINED_MASK);

    /// Kinds that display layers do not render as standalone symbols.
    pub const NOT_VISIBLE: Self = Self::UNDEFINED.union(Self::FILE);

    /// Raw integer form, for collaborators that persist the mask.
    pub fn to_int(self) -> i32 {
        self.bits() as i32
    }

    /// Parse a raw integer mask.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidNodeType`] for zero, negative values, or
    /// values carrying bits outside the known kinds.
    pub fn from_int(value: i32) -> Result<Self> {
        if value <= 0 {
            return Err(GraphError::InvalidNodeType { value });
        }
        Self::from_bits(value as u32).ok_or(GraphError::InvalidNodeType { value })
    }

    /// True if at least one kind is set and all of them are undefined.
    pub fn is_undefined(self) -> bool {
        !self.is_empty() && Self::UNDEFINED_MASK.contains(self)
    }

    /// True if at least one defined kind is set.
    pub fn is_defined(self) -> bool {
        self.intersects(Self::DEFINED_MASK)
    }

    /// The highest set kind. A defined kind always wins over an undefined one.
    ///
    /// Returns an empty mask for an empty input.
    pub fn primary(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::from_bits_retain(1 << (31 - self.bits().leading_zeros()))
    }

    /// Iterate over the single kinds contained in this mask, lowest bit first.
    pub fn kinds(self) -> impl Iterator<Item = NodeType> {
        NODE_KIND_NAMES
            .iter()
            .map(|(kind, _)| *kind)
            .filter(move |kind| self.contains(*kind))
    }

    /// Human-readable name of the mask, e.g. `"class"` or `"struct | class"`.
    pub fn type_string(self) -> String {
        let names: Vec<&str> = NODE_KIND_NAMES
            .iter()
            .filter(|(kind, _)| self.contains(*kind))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(" | ")
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_string())
    }
}

bitflags! {
    /// Set of relationship kinds an edge carries.
    ///
    /// Only [`EdgeType::MEMBER`] has meaning inside this crate (it encodes
    /// containment); every other kind is matched opaquely through masks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct EdgeType: u32 {
        /// Source contains target (namespace contains class, class contains method)
        const MEMBER = 0x1;
        /// Variable or field is of the target type
        const TYPE_OF = 0x2;
        /// Function returns the target type
        const RETURN_TYPE_OF = 0x4;
        /// Function takes a parameter of the target type
        const PARAMETER_TYPE_OF = 0x8;
        /// Any other use of the target type
        const TYPE_USAGE = 0x10;
        /// Source derives from target
        const INHERITANCE = 0x20;
        /// Source calls target
        const CALL = 0x40;
        /// Source reads or writes target
        const USAGE = 0x80;
        /// Source is an alias of target
        const TYPEDEF_OF = 0x100;
        /// Source is a template parameter of target
        const TEMPLATE_PARAMETER_OF = 0x200;
        /// File includes file
        const INCLUDE = 0x400;
        /// Source expands macro target
        const MACRO_USAGE = 0x800;
    }
}

const EDGE_KIND_NAMES: [(EdgeType, &str); 12] = [
    (EdgeType::MEMBER, "member"),
    (EdgeType::TYPE_OF, "type of"),
    (EdgeType::RETURN_TYPE_OF, "return type of"),
    (EdgeType::PARAMETER_TYPE_OF, "parameter type of"),
    (EdgeType::TYPE_USAGE, "type usage"),
    (EdgeType::INHERITANCE, "inheritance"),
    (EdgeType::CALL, "call"),
    (EdgeType::USAGE, "usage"),
    (EdgeType::TYPEDEF_OF, "typedef of"),
    (EdgeType::TEMPLATE_PARAMETER_OF, "template parameter of"),
    (EdgeType::INCLUDE, "include"),
    (EdgeType::MACRO_USAGE, "macro usage"),
];

impl EdgeType {
    /// Every kind except containment.
    pub const REFERENCE_MASK: Self = Self::all().difference(Self::MEMBER);

    /// Human-readable name of the mask, e.g. `"call"`.
    pub fn type_string(self) -> String {
        let names: Vec<&str> = EDGE_KIND_NAMES
            .iter()
            .filter(|(kind, _)| self.contains(*kind))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(" | ")
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_string())
    }
}

/// Deserialize a node type, rejecting the empty mask.
pub(crate) fn non_empty_node_type<'de, D>(deserializer: D) -> std::result::Result<NodeType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let node_type = NodeType::deserialize(deserializer)?;
    if node_type.is_empty() {
        return Err(serde::de::Error::custom("node type mask is empty"));
    }
    Ok(node_type)
}

/// Deserialize an edge type, rejecting the empty mask.
pub(crate) fn non_empty_edge_type<'de, D>(deserializer: D) -> std::result::Result<EdgeType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let edge_type = EdgeType::deserialize(deserializer)?;
    if edge_type.is_empty() {
        return Err(serde::de::Error::custom("edge type mask is empty"));
    }
    Ok(edge_type)
}

/// Direction of an edge relative to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Edges whose source is the node
    Outgoing,
    /// Edges whose target is the node
    Incoming,
    /// Edges in either direction
    Both,
}
