#![warn(clippy::pedantic)]

//! Grammar artifact compilation for treeforge.
//!
//! This crate turns a language's grammar source into a cached artifact
//! directory: the grammar copy, the external tool's generated parser, the
//! optional auxiliary data file, and the runtime modifier the runtime
//! loads back. See [`pipeline::Pipeline`] for the full step sequence.

pub mod errors;
pub mod metadata;
pub mod modifier;
pub mod pipeline;
pub mod schema;
pub mod tool;

pub use errors::ToolError;
pub use metadata::{JsonMetadataLoader, MetadataLoader, ParserMetadata};
pub use modifier::RuntimeModifier;
pub use pipeline::{CompileOutcome, Pipeline};
pub use schema::{SchemaError, validate_rule_schema};
pub use tool::{
    AuxDataGenerator, CompileJob, GrammarCompiler, SubprocessAuxGenerator,
    SubprocessGrammarCompiler,
};
