//! Graph configuration.

use crate::graph::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Configuration for graph construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Separator for name hierarchies created by the helpers
    pub name_separator: String,

    /// Check member edges as they are added: a node gets at most one
    /// container and containment never forms a cycle
    pub enforce_containment: bool,

    /// Keep a full-name index for `find_node_by_full_name`
    pub index_full_names: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name_separator: DEFAULT_SEPARATOR.to_string(),
            enforce_containment: true,
            index_full_names: true,
        }
    }
}

impl GraphConfig {
    /// Create config with every check enabled (the default)
    pub fn strict() -> Self {
        Self::default()
    }

    /// Create config for bulk loading already-validated data (skips
    /// containment checks and the name index)
    pub fn lenient() -> Self {
        Self {
            enforce_containment: false,
            index_full_names: false,
            ..Default::default()
        }
    }

    /// Builder method: use `separator` for helper-created names
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }
}
