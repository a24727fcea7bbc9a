//! The artifact compilation pipeline.
//!
//! One call compiles a language's grammar into its cache directory:
//!
//! 1. resolve the cache directory; if it already exists, stop — its
//!    existence is the sole cache-hit signal and nothing is re-checked
//! 2. create the cache directory chain, tolerating pre-existing pieces
//! 3. copy the grammar source in, renamed after the language
//! 4. run the grammar compiler tool inside the cache directory
//! 5. generate auxiliary data when the language needs it
//! 6. load the generated parser metadata and build the name maps
//! 7. validate the declared rule schema against the generated rule set
//! 8. generate and write the runtime modifier artifact
//!
//! A failed compilation leaves a partial cache directory behind, which
//! subsequent calls treat as a hit; removing the directory is the way to
//! force recompilation.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use treeforge_config::{CachePaths, LanguageCompileConfig, LanguageRuntimeConfig};
use treeforge_matcher::{MatcherCompiler, PathMatcherCompiler};

use crate::metadata::{JsonMetadataLoader, MetadataLoader, generated_rule_set, symbol_name_map};
use crate::modifier::RuntimeModifier;
use crate::schema::validate_rule_schema;
use crate::tool::{AuxDataGenerator, CompileJob, GrammarCompiler};

/// What a pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    /// The language's cache directory.
    pub cache_dir: PathBuf,
    /// Whether the artifacts were already cached and compilation skipped.
    pub cache_hit: bool,
}

/// Drives grammar compilation for one or more languages.
pub struct Pipeline {
    paths: CachePaths,
    grammar_compiler: Box<dyn GrammarCompiler>,
    aux_generator: Box<dyn AuxDataGenerator>,
    metadata_loader: Box<dyn MetadataLoader>,
    matcher_compiler: Box<dyn MatcherCompiler>,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        paths: CachePaths,
        grammar_compiler: Box<dyn GrammarCompiler>,
        aux_generator: Box<dyn AuxDataGenerator>,
        metadata_loader: Box<dyn MetadataLoader>,
        matcher_compiler: Box<dyn MatcherCompiler>,
    ) -> Self {
        Self {
            paths,
            grammar_compiler,
            aux_generator,
            metadata_loader,
            matcher_compiler,
        }
    }

    /// Builds a pipeline with the default metadata loader and matcher
    /// compiler.
    #[must_use]
    pub fn with_tool(
        paths: CachePaths,
        grammar_compiler: Box<dyn GrammarCompiler>,
        aux_generator: Box<dyn AuxDataGenerator>,
    ) -> Self {
        Self::new(
            paths,
            grammar_compiler,
            aux_generator,
            Box::new(JsonMetadataLoader),
            Box::new(PathMatcherCompiler),
        )
    }

    #[must_use = "returns the paths without side effects"]
    pub fn paths(&self) -> &CachePaths {
        &self.paths
    }

    /// Compiles a language's artifacts unless they are already cached.
    ///
    /// # Errors
    ///
    /// Returns an error if any pipeline step fails; schema disagreements
    /// surface as [`crate::schema::SchemaError`] in the chain.
    pub fn compile(
        &self,
        compile_config: &LanguageCompileConfig,
        runtime_config: &LanguageRuntimeConfig,
    ) -> Result<CompileOutcome> {
        let cache_dir = self.paths.resolve_cache_dir(runtime_config);
        if cache_dir.exists() {
            return Ok(CompileOutcome {
                cache_dir,
                cache_hit: true,
            });
        }

        self.compile_into(&cache_dir, compile_config, runtime_config)?;
        Ok(CompileOutcome {
            cache_dir,
            cache_hit: false,
        })
    }

    fn compile_into(
        &self,
        cache_dir: &Path,
        compile_config: &LanguageCompileConfig,
        runtime_config: &LanguageRuntimeConfig,
    ) -> Result<()> {
        let language = &runtime_config.language;

        ensure_dir(&self.paths.root)?;
        ensure_dir(&self.paths.cache)?;
        ensure_dir(cache_dir)?;

        let source = compile_config.grammar_path.clone().unwrap_or_else(|| {
            self.paths
                .default_grammar_path(language, &compile_config.grammar_file)
        });
        let extension = compile_config.grammar_extension();
        let dest = self.paths.grammar_copy_path(language, extension);
        std::fs::copy(&source, &dest).with_context(|| {
            format!(
                "Failed to copy grammar from {} to {}",
                source.display(),
                dest.display()
            )
        })?;

        let grammar_file = format!("{language}.{extension}");
        self.grammar_compiler.compile_grammar(&CompileJob {
            cache_dir,
            grammar_file: &grammar_file,
            language,
            generate_listener: compile_config.generate_listener,
            generate_visitor: compile_config.generate_visitor,
        })?;

        if compile_config.needs_aux_data {
            let aux_path = self.paths.aux_data_path();
            if !aux_path.exists() {
                self.aux_generator.generate(&aux_path)?;
            }
        }

        let metadata = self.metadata_loader.load(cache_dir, language)?;
        let symbols = symbol_name_map(&metadata.symbolic_names);
        let generated = generated_rule_set(&metadata.rule_names, &symbols);
        let declared: Vec<String> = runtime_config.rules.keys().cloned().collect();
        validate_rule_schema(&generated, &declared)?;

        let modifier = RuntimeModifier::generate(
            compile_config,
            runtime_config,
            symbols,
            metadata.rule_names,
            self.matcher_compiler.as_ref(),
        )?;
        let modifier_path = self.paths.modifier_path(language);
        std::fs::write(&modifier_path, modifier.render()?).with_context(|| {
            format!(
                "Failed to write runtime modifier to {}",
                modifier_path.display()
            )
        })?;

        Ok(())
    }
}

/// Creates a directory, treating an already existing one as success.
fn ensure_dir(path: &Path) -> Result<()> {
    match std::fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(anyhow::Error::from(err)
            .context(format!("Failed to create directory: {}", path.display()))),
    }
}
