//! Serializable compiled matcher representation.

use serde::{Deserialize, Serialize};

/// One step along a matcher's path through the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStep {
    /// Matches a node whose kind equals the given name exactly.
    Kind(String),
    /// Matches a node of any kind.
    Any,
}

impl MatchStep {
    #[must_use]
    pub fn accepts(&self, kind: &str) -> bool {
        match self {
            Self::Kind(name) => name == kind,
            Self::Any => true,
        }
    }
}

/// A matcher compiled from a declarative spec.
///
/// A node matches when the steps can be consumed in order down a chain of
/// parent-to-child edges starting at that node; the node reached by the
/// final step is reported as the hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledMatcher {
    pub name: String,
    pub steps: Vec<MatchStep>,
}

impl CompiledMatcher {
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<MatchStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }
}
