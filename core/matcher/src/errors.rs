//! Errors raised while compiling matcher specs.

use thiserror::Error;

/// Failure while compiling a declarative matcher spec.
#[must_use = "errors must not be silently ignored"]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    /// A spec path names a kind the runtime configuration never declares.
    #[error("matcher spec '{spec}' references undeclared kind '{step}'")]
    UnknownRuleInSpec { spec: String, step: String },

    /// A spec declared an empty path.
    #[error("matcher spec '{name}' has an empty path")]
    EmptySpec { name: String },
}
