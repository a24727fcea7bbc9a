//! Errors raised while normalizing a parse tree.

use thiserror::Error;

/// Failure while building a normalized AST from a parse tree.
#[must_use = "errors must not be silently ignored"]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A terminal carried a symbol index the name tables cannot resolve.
    #[error("unknown terminal symbol type {symbol_type}")]
    UnknownSymbol { symbol_type: usize },

    /// A rule node carried an index past the end of the rule name table.
    #[error("unknown rule index {rule_index}")]
    UnknownRule { rule_index: usize },

    /// The runtime configuration declares no options for a rule the parse
    /// tree produced.
    #[error("no rule configuration declared for '{kind}'")]
    MissingRuleConfig { kind: String },
}
