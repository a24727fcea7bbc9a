//! Cache layout for compiled grammar artifacts.
//!
//! The default root directory is `~/.treeforge/`, which can be overridden by
//! setting the `TREEFORGE_HOME` environment variable.
//!
//! ## Directory Structure
//!
//! ```text
//! ~/.treeforge/                 # Root directory (or TREEFORGE_HOME)
//!   cache/                      # Compiled artifacts, one dir per language
//!     func_data                  # Shared auxiliary data (generated on demand)
//!     Expr/
//!       Expr.g4                 # Grammar copy, named after the language
//!       ExprParser.json         # Generated parser metadata
//!       runtime_modifier.json   # Runtime modifier artifact
//!     Json/
//!       ...
//!   grammars/                   # Bundled grammar sources
//!     expr/
//!       Expr.g4
//! ```
//!
//! The existence of a language's cache directory is the sole cache-hit
//! signal: once it exists, compilation is skipped for that language until
//! the directory is removed.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::language::LanguageRuntimeConfig;

/// Environment variable to override the default cache root directory.
pub const TREEFORGE_HOME_ENV: &str = "TREEFORGE_HOME";

/// File name of the runtime modifier artifact inside a language cache dir.
pub const MODIFIER_FILE: &str = "runtime_modifier.json";

/// File name of the shared auxiliary data artifact under the cache root.
pub const AUX_DATA_FILE: &str = "func_data";

/// Manages paths under the treeforge cache root.
///
/// This struct provides access to all cache-related directories and files,
/// ensuring consistent path construction across the codebase.
#[derive(Debug, Clone)]
pub struct CachePaths {
    /// Root directory for all treeforge data (`~/.treeforge` or `TREEFORGE_HOME`).
    pub root: PathBuf,
    /// Directory containing per-language compiled artifact directories.
    pub cache: PathBuf,
    /// Directory containing bundled grammar sources.
    pub grammars: PathBuf,
}

impl CachePaths {
    /// Creates a new `CachePaths` instance.
    ///
    /// The root directory is determined by:
    /// 1. The `TREEFORGE_HOME` environment variable if set
    /// 2. On Windows: `%APPDATA%\treeforge`
    /// 3. On Unix: `~/.treeforge` in the user's home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let root = if let Ok(home) = std::env::var(TREEFORGE_HOME_ENV) {
            PathBuf::from(home)
        } else {
            #[cfg(windows)]
            {
                dirs::data_dir()
                    .context("Cannot determine AppData directory. Set TREEFORGE_HOME environment variable.")?
                    .join("treeforge")
            }
            #[cfg(not(windows))]
            {
                dirs::home_dir()
                    .context(
                        "Cannot determine home directory. Set TREEFORGE_HOME environment variable.",
                    )?
                    .join(".treeforge")
            }
        };

        Ok(Self::with_root(root))
    }

    /// Creates a new `CachePaths` instance with a specific root directory.
    ///
    /// This is useful for testing or when the root directory is known in advance.
    #[must_use = "returns new paths instance without side effects"]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            cache: root.join("cache"),
            grammars: root.join("grammars"),
            root,
        }
    }

    /// Returns the cache directory for a language's compiled artifacts.
    #[must_use = "returns the path without side effects"]
    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.cache.join(language)
    }

    /// Resolves the cache directory for a runtime configuration.
    #[must_use = "returns the path without side effects"]
    pub fn resolve_cache_dir(&self, config: &LanguageRuntimeConfig) -> PathBuf {
        self.language_dir(&config.language)
    }

    /// Returns the path of the runtime modifier artifact for a language.
    #[must_use = "returns the path without side effects"]
    pub fn modifier_path(&self, language: &str) -> PathBuf {
        self.language_dir(language).join(MODIFIER_FILE)
    }

    /// Returns the path of the shared auxiliary data artifact.
    #[must_use = "returns the path without side effects"]
    pub fn aux_data_path(&self) -> PathBuf {
        self.cache.join(AUX_DATA_FILE)
    }

    /// Returns the in-cache destination for a grammar copy. The copy is
    /// named after the language itself, keeping the original file extension.
    #[must_use = "returns the path without side effects"]
    pub fn grammar_copy_path(&self, language: &str, extension: &str) -> PathBuf {
        self.language_dir(language)
            .join(format!("{language}.{extension}"))
    }

    /// Returns the bundled grammar source path for a language.
    #[must_use = "returns the path without side effects"]
    pub fn default_grammar_path(&self, language: &str, grammar_file: &str) -> PathBuf {
        self.grammars
            .join(language.to_lowercase())
            .join(grammar_file)
    }

    /// Checks whether a language's artifacts are already cached.
    #[must_use = "returns cache status without side effects"]
    pub fn is_cached(&self, language: &str) -> bool {
        self.language_dir(language).exists()
    }
}
