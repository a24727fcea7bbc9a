//! The runtime modifier artifact.
//!
//! Compilation distills everything the runtime needs from a compiled
//! grammar into one JSON file in the language's cache directory: the
//! symbol and rule name maps plus any compiled tree matchers. Loading it
//! back is the runtime's only dependency on the compilation step.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use treeforge_config::{LanguageCompileConfig, LanguageRuntimeConfig};
use treeforge_matcher::{CompiledMatcher, MatcherCompiler};

/// Everything the runtime layers onto a language configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeModifier {
    pub symbol_name_map: Vec<Option<String>>,
    pub rule_name_map: Vec<String>,
    #[serde(default)]
    pub matchers: Vec<CompiledMatcher>,
}

impl RuntimeModifier {
    /// Generates the modifier from validated compilation outputs.
    ///
    /// Matcher compilation is skipped entirely when the compile config
    /// declares no specs.
    ///
    /// # Errors
    ///
    /// Returns an error if a matcher spec fails to compile.
    pub fn generate(
        compile_config: &LanguageCompileConfig,
        runtime_config: &LanguageRuntimeConfig,
        symbol_name_map: Vec<Option<String>>,
        rule_name_map: Vec<String>,
        matcher_compiler: &dyn MatcherCompiler,
    ) -> Result<Self> {
        let mut matchers = Vec::new();
        if !compile_config.tree_matcher_specs.is_empty() {
            let generate = matcher_compiler.make_generator(compile_config, runtime_config)?;
            for spec in &compile_config.tree_matcher_specs {
                matchers.push(generate(spec)?);
            }
        }
        Ok(Self {
            symbol_name_map,
            rule_name_map,
            matchers,
        })
    }

    /// Renders the modifier as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Loads a modifier back from its artifact file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read runtime modifier from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse runtime modifier at {}", path.display()))
    }
}
