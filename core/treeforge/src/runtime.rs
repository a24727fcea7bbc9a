//! The loaded runtime for one language.
//!
//! Augmentation is pure: a runtime configuration plus a modifier yields a
//! [`LoadedRuntime`] value, leaving the inputs' sources untouched. Nothing
//! global is mutated, so runtimes for different languages, or different
//! modifier versions of the same language, coexist freely in one process.

use anyhow::Result;
use treeforge_ast::{AstNode, BuildError, NameTables, ParseFault, ParseTree};
use treeforge_compile::RuntimeModifier;
use treeforge_config::{CachePaths, LanguageRuntimeConfig};
use treeforge_matcher::{CompiledMatcher, MatchHit};

/// A language runtime ready to normalize parse trees.
#[derive(Debug, Clone)]
pub struct LoadedRuntime {
    pub config: LanguageRuntimeConfig,
    pub tables: NameTables,
    pub matchers: Vec<CompiledMatcher>,
}

/// Combines a runtime configuration with a compiled modifier.
#[must_use = "returns the runtime without side effects"]
pub fn augment(config: LanguageRuntimeConfig, modifier: RuntimeModifier) -> LoadedRuntime {
    LoadedRuntime {
        config,
        tables: NameTables::new(modifier.symbol_name_map, modifier.rule_name_map),
        matchers: modifier.matchers,
    }
}

/// Loads a language's modifier from the cache and augments `config`.
///
/// # Errors
///
/// Returns an error if the modifier artifact is missing or malformed.
pub fn load_runtime(paths: &CachePaths, config: LanguageRuntimeConfig) -> Result<LoadedRuntime> {
    let modifier = RuntimeModifier::load(&paths.modifier_path(&config.language))?;
    Ok(augment(config, modifier))
}

impl LoadedRuntime {
    /// Normalizes a parse tree into an AST.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the tree references unknown indices or
    /// rules the configuration never declared.
    pub fn build_ast(
        &self,
        tree: &ParseTree,
        on_fault: &mut dyn FnMut(ParseFault),
    ) -> Result<AstNode, BuildError> {
        treeforge_ast::build_ast(tree, &self.tables, &self.config.rules, on_fault)
    }

    /// Runs this runtime's compiled matchers over a built AST.
    #[must_use = "returns hits without side effects"]
    pub fn run_matchers(&self, root: &AstNode) -> Vec<MatchHit> {
        treeforge_matcher::run_matchers(&self.matchers, root)
    }
}
