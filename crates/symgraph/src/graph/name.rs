//! Qualified names as ordered segment lists.

use serde::{Deserialize, Serialize};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "::";

/// Ordered sequence of name segments plus the separator that joins them.
///
/// Two hierarchies are equal iff their segments and separator match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameHierarchy {
    segments: Vec<String>,
    separator: String,
}

impl NameHierarchy {
    /// Create an empty hierarchy with the given separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            segments: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Create a hierarchy from segments, outermost first.
    pub fn from_segments<I, S>(segments: I, separator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            separator: separator.into(),
        }
    }

    /// Split a qualified name on `separator`. Empty segments are dropped, so
    /// `"::a::b"` yields `["a", "b"]`.
    pub fn parse(qualified: &str, separator: &str) -> Self {
        let segments = if separator.is_empty() {
            vec![qualified.to_string()]
        } else {
            qualified
                .split(separator)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        };

        Self {
            segments,
            separator: separator.to_string(),
        }
    }

    /// Create a hierarchy joined by [`DEFAULT_SEPARATOR`].
    pub fn with_default_separator<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_segments(segments, DEFAULT_SEPARATOR)
    }

    /// Append an innermost segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Remove and return the innermost segment.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The separator used by [`full_name`](Self::full_name).
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The enclosing hierarchy, or `None` when there is no enclosing scope.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
            separator: self.separator.clone(),
        })
    }

    /// A copy of this hierarchy with one more innermost segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push(segment);
        child
    }

    /// Last segment, or `""` for an empty hierarchy.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// All segments joined by the separator.
    pub fn full_name(&self) -> String {
        self.segments.join(&self.separator)
    }
}

impl Default for NameHierarchy {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl std::fmt::Display for NameHierarchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
