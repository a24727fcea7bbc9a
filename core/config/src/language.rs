//! Per-language configuration.
//!
//! Each supported language carries two configurations: a compile-time one
//! describing how its grammar is turned into cached artifacts, and a
//! runtime one describing how parse trees for it are normalized.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use treeforge_ast::RuleOptions;

/// A declarative tree-matcher request: match nodes reached by walking the
/// named kinds from an ancestor down a contiguous child chain. A `"*"`
/// step matches any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherSpec {
    pub name: String,
    pub path: Vec<String>,
}

impl MatcherSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

/// Compile-time configuration for one language.
#[derive(Debug, Clone)]
pub struct LanguageCompileConfig {
    /// Overrides the bundled grammar source location when set.
    pub grammar_path: Option<PathBuf>,
    /// File name of the grammar source, e.g. `Expr.g4`.
    pub grammar_file: String,
    /// Whether the grammar tool should emit a listener interface.
    pub generate_listener: bool,
    /// Whether the grammar tool should emit a visitor interface.
    pub generate_visitor: bool,
    /// Whether the language needs the auxiliary data artifact generated.
    pub needs_aux_data: bool,
    /// Tree matchers to compile into the runtime modifier.
    pub tree_matcher_specs: Vec<MatcherSpec>,
}

impl LanguageCompileConfig {
    #[must_use]
    pub fn new(grammar_file: impl Into<String>) -> Self {
        Self {
            grammar_path: None,
            grammar_file: grammar_file.into(),
            generate_listener: false,
            generate_visitor: false,
            needs_aux_data: false,
            tree_matcher_specs: Vec::new(),
        }
    }

    /// File extension of the grammar source, defaulting to `g4` when the
    /// file name carries none.
    #[must_use = "returns the extension without side effects"]
    pub fn grammar_extension(&self) -> &str {
        std::path::Path::new(&self.grammar_file)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("g4")
    }
}

/// Runtime configuration for one language.
#[derive(Debug, Clone, Default)]
pub struct LanguageRuntimeConfig {
    /// Language name; also names the cache directory.
    pub language: String,
    /// Rule the external parser is entered at.
    pub entry_rule: String,
    /// Declared rule schema: every grammar rule and dotted terminal name,
    /// each mapped to its build options.
    pub rules: FxHashMap<String, RuleOptions>,
}

impl LanguageRuntimeConfig {
    #[must_use]
    pub fn new(language: impl Into<String>, entry_rule: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entry_rule: entry_rule.into(),
            rules: FxHashMap::default(),
        }
    }

    /// Declares a rule with passthrough options. Terminal names must be
    /// dot-prefixed, rule names plain.
    pub fn declare(&mut self, name: impl Into<String>) -> &mut Self {
        self.rules.insert(name.into(), RuleOptions::passthrough());
        self
    }

    /// Declares a rule with explicit options.
    pub fn declare_with(&mut self, name: impl Into<String>, options: RuleOptions) -> &mut Self {
        self.rules.insert(name.into(), options);
        self
    }
}
