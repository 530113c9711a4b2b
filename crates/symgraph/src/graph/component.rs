//! Optional metadata records attached to nodes.
//!
//! Not every node kind needs abstractness, constness, staticness or an
//! originating file, so these facets live in optional slots instead of on
//! the node itself. Records are immutable and shared through [`Arc`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How abstract a method or class is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AbstractionType {
    /// Concrete
    #[default]
    None,
    /// Overridable
    Virtual,
    /// Must be overridden
    PureVirtual,
}

/// Abstraction facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenComponentAbstraction {
    /// Level of abstraction
    pub abstraction: AbstractionType,
}

impl TokenComponentAbstraction {
    /// Create an abstraction record.
    pub fn new(abstraction: AbstractionType) -> Self {
        Self { abstraction }
    }
}

/// Marks a node as const.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenComponentConst;

/// Marks a node as static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenComponentStatic;

/// File the node was declared in (or is, for file nodes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenComponentFilePath {
    /// Path of the file
    pub path: PathBuf,
}

impl TokenComponentFilePath {
    /// Create a file path record.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The stored path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Discriminant of the component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// [`TokenComponentAbstraction`]
    Abstraction,
    /// [`TokenComponentConst`]
    Const,
    /// [`TokenComponentStatic`]
    Static,
    /// [`TokenComponentFilePath`]
    FilePath,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Abstraction => write!(f, "Abstraction"),
            ComponentKind::Const => write!(f, "Const"),
            ComponentKind::Static => write!(f, "Static"),
            ComponentKind::FilePath => write!(f, "FilePath"),
        }
    }
}

/// Zero or one record of each component kind.
///
/// Slots are only ever filled. Setting a filled slot replaces the record and
/// returns the previous one so the caller can report the overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    abstraction: Option<Arc<TokenComponentAbstraction>>,
    is_const: Option<Arc<TokenComponentConst>>,
    is_static: Option<Arc<TokenComponentStatic>>,
    file_path: Option<Arc<TokenComponentFilePath>>,
}

impl Components {
    /// Create an empty component set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_abstraction(
        &mut self,
        component: Arc<TokenComponentAbstraction>,
    ) -> Option<Arc<TokenComponentAbstraction>> {
        self.abstraction.replace(component)
    }

    pub(crate) fn set_const(
        &mut self,
        component: Arc<TokenComponentConst>,
    ) -> Option<Arc<TokenComponentConst>> {
        self.is_const.replace(component)
    }

    pub(crate) fn set_static(
        &mut self,
        component: Arc<TokenComponentStatic>,
    ) -> Option<Arc<TokenComponentStatic>> {
        self.is_static.replace(component)
    }

    pub(crate) fn set_file_path(
        &mut self,
        component: Arc<TokenComponentFilePath>,
    ) -> Option<Arc<TokenComponentFilePath>> {
        self.file_path.replace(component)
    }

    /// Attached abstraction record.
    pub fn abstraction(&self) -> Option<&Arc<TokenComponentAbstraction>> {
        self.abstraction.as_ref()
    }

    /// Attached const marker.
    pub fn const_marker(&self) -> Option<&Arc<TokenComponentConst>> {
        self.is_const.as_ref()
    }

    /// Attached static marker.
    pub fn static_marker(&self) -> Option<&Arc<TokenComponentStatic>> {
        self.is_static.as_ref()
    }

    /// Attached file path record.
    pub fn file_path(&self) -> Option<&Arc<TokenComponentFilePath>> {
        self.file_path.as_ref()
    }

    /// True if a record of `kind` is attached.
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Abstraction => self.abstraction.is_some(),
            ComponentKind::Const => self.is_const.is_some(),
            ComponentKind::Static => self.is_static.is_some(),
            ComponentKind::FilePath => self.file_path.is_some(),
        }
    }

    /// Kinds currently attached, in declaration order.
    pub fn kinds(&self) -> Vec<ComponentKind> {
        [
            ComponentKind::Abstraction,
            ComponentKind::Const,
            ComponentKind::Static,
            ComponentKind::FilePath,
        ]
        .into_iter()
        .filter(|kind| self.has(*kind))
        .collect()
    }

    /// Number of attached records.
    pub fn len(&self) -> usize {
        self.kinds().len()
    }

    /// True if nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
