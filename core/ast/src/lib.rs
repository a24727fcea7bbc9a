#![warn(clippy::pedantic)]
pub mod builder;
pub mod errors;
pub mod finalize;
pub mod nodes;
pub mod tables;
pub mod tree;

pub use builder::{ParseFault, build_ast};
pub use errors::BuildError;
pub use finalize::{Finalizer, RuleOptions};
pub use nodes::AstNode;
pub use tables::NameTables;
pub use tree::ParseTree;
