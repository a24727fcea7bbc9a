//! Shared fixtures for the end to end tests.
//!
//! The fake grammar compiler stands in for the external tool: it emits the
//! parser metadata file the real tool would, so the rest of the pipeline
//! runs unmodified against a temporary cache root.

use std::path::Path;

use anyhow::Result;
use treeforge::{CachePaths, LanguageCompileConfig, LanguageRuntimeConfig};
use treeforge_compile::tool::{AuxDataGenerator, CompileJob, GrammarCompiler};

/// Emits `<Language>Parser.json` into the cache directory, as the real
/// tool would.
pub(crate) struct FakeGrammarCompiler {
    metadata_json: String,
}

impl FakeGrammarCompiler {
    pub(crate) fn new(metadata_json: &str) -> Self {
        Self {
            metadata_json: metadata_json.to_owned(),
        }
    }

    /// Metadata for the Expr fixture grammar: one rule, one named terminal.
    pub(crate) fn expr() -> Self {
        Self::new(r#"{"symbolicNames": [null, "NUMBER"], "ruleNames": ["expr"]}"#)
    }
}

impl GrammarCompiler for FakeGrammarCompiler {
    fn compile_grammar(&self, job: &CompileJob<'_>) -> Result<()> {
        let metadata_file = format!("{}Parser.json", job.language);
        std::fs::write(job.cache_dir.join(metadata_file), &self.metadata_json)?;
        Ok(())
    }
}

pub(crate) struct NoopAuxGenerator;

impl AuxDataGenerator for NoopAuxGenerator {
    fn generate(&self, out_path: &Path) -> Result<()> {
        std::fs::write(out_path, b"")?;
        Ok(())
    }
}

/// Creates a cache root with the bundled Expr grammar in place.
pub(crate) fn expr_cache_root() -> (tempfile::TempDir, CachePaths) {
    let root = tempfile::tempdir().unwrap();
    let paths = CachePaths::with_root(root.path().to_path_buf());
    let grammar_dir = paths.grammars.join("expr");
    std::fs::create_dir_all(&grammar_dir).unwrap();
    std::fs::write(grammar_dir.join("Expr.g4"), "grammar Expr;").unwrap();
    (root, paths)
}

pub(crate) fn expr_compile_config() -> LanguageCompileConfig {
    LanguageCompileConfig::new("Expr.g4")
}

pub(crate) fn expr_runtime_config() -> LanguageRuntimeConfig {
    let mut rc = LanguageRuntimeConfig::new("Expr", "expr");
    rc.declare("expr").declare(".NUMBER");
    rc
}
