#![warn(clippy::pedantic)]

//! Grammar compilation and parse-tree normalization.
//!
//! treeforge supports languages whose parsers are generated by an external
//! grammar tool. The crate splits into two halves:
//!
//! * **compile time** — [`compile`] ensures a language's artifacts exist
//!   in the cache: the grammar is copied in, the tool is run, the declared
//!   rule schema is validated against what the grammar actually produces,
//!   and a runtime modifier artifact is written.
//! * **run time** — [`load_runtime`] reads the modifier back and augments
//!   the language's runtime configuration into a [`LoadedRuntime`], which
//!   normalizes parse trees into ASTs and runs compiled tree matchers over
//!   them.
//!
//! The halves only meet through the modifier artifact on disk, so a
//! process that never compiles (artifacts shipped ahead of time) needs
//! only the runtime half.

pub mod runtime;

pub use runtime::{LoadedRuntime, augment, load_runtime};

pub use treeforge_ast::{
    AstNode, BuildError, Finalizer, NameTables, ParseFault, ParseTree, RuleOptions,
};
pub use treeforge_compile::{
    AuxDataGenerator, CompileOutcome, GrammarCompiler, Pipeline, RuntimeModifier, SchemaError,
    SubprocessAuxGenerator, SubprocessGrammarCompiler,
};
pub use treeforge_config::{
    CachePaths, LanguageCompileConfig, LanguageRuntimeConfig, MatcherSpec,
};
pub use treeforge_matcher::{CompiledMatcher, MatchHit};

use anyhow::Result;

/// Ensures a language's artifacts are compiled into the cache.
///
/// Convenience over building a [`Pipeline`] by hand; uses the default
/// metadata loader and matcher compiler.
///
/// # Errors
///
/// Returns an error if any compilation step fails.
pub fn compile(
    paths: CachePaths,
    grammar_compiler: Box<dyn GrammarCompiler>,
    aux_generator: Box<dyn AuxDataGenerator>,
    compile_config: &LanguageCompileConfig,
    runtime_config: &LanguageRuntimeConfig,
) -> Result<CompileOutcome> {
    Pipeline::with_tool(paths, grammar_compiler, aux_generator)
        .compile(compile_config, runtime_config)
}
