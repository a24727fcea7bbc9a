//! Per-rule finalizer chains.
//!
//! A finalizer is a pure transformation applied to a freshly built rule
//! node before it is handed to its parent. Each rule declares an ordered
//! chain; the builder threads the node through the chain in declaration
//! order, so later finalizers see the output of earlier ones.

use std::fmt;
use std::sync::Arc;

use crate::nodes::AstNode;

/// A single node transformation in a rule's finalizer chain.
pub type Finalizer = Arc<dyn Fn(AstNode) -> AstNode + Send + Sync>;

/// Build-time options declared for one grammar rule.
#[derive(Clone, Default)]
pub struct RuleOptions {
    pub finalizers: Vec<Finalizer>,
}

impl RuleOptions {
    /// Options that leave the built node untouched.
    #[must_use]
    pub fn passthrough() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_finalizers(finalizers: Vec<Finalizer>) -> Self {
        Self { finalizers }
    }

    /// Threads `node` through the chain in declaration order.
    #[must_use]
    pub fn finalize(&self, node: AstNode) -> AstNode {
        self.finalizers.iter().fold(node, |n, f| f(n))
    }
}

impl fmt::Debug for RuleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleOptions")
            .field("finalizers", &self.finalizers.len())
            .finish()
    }
}
