//! Concrete parse tree input model.
//!
//! The external parser runtime produces these nodes; the core never
//! tokenizes or parses input itself. Optional or elided grammar elements
//! appear as explicit `None` children rather than a falsy overload, so a
//! present node is never dropped on value.

use serde::{Deserialize, Serialize};

/// A node of the external parser's concrete parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseTree {
    /// Leaf token. `start` is the offset of the token's first byte; `stop`
    /// is the inclusive offset of its last byte. Tokens with no stop
    /// boundary (e.g. end-of-input markers) carry `None`.
    Terminal {
        symbol_type: usize,
        start: usize,
        stop: Option<usize>,
    },

    /// Composite rule node with ordered children, some of which may be
    /// explicitly absent.
    Rule {
        rule_index: usize,
        start: usize,
        children: Vec<Option<ParseTree>>,
    },
}

impl ParseTree {
    #[must_use]
    pub fn terminal(symbol_type: usize, start: usize, stop: Option<usize>) -> Self {
        Self::Terminal {
            symbol_type,
            start,
            stop,
        }
    }

    #[must_use]
    pub fn rule(rule_index: usize, start: usize, children: Vec<Option<ParseTree>>) -> Self {
        Self::Rule {
            rule_index,
            start,
            children,
        }
    }

    /// Start boundary of this node.
    #[must_use]
    pub fn start(&self) -> usize {
        match self {
            Self::Terminal { start, .. } | Self::Rule { start, .. } => *start,
        }
    }
}
