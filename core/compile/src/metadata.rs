//! Generated parser metadata and name-map construction.
//!
//! The grammar compiler emits a `<Language>Parser.json` file alongside the
//! generated parser. It carries the symbolic terminal names and rule names
//! in grammar declaration order; everything the runtime knows about a
//! compiled grammar is derived from it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use treeforge_ast::tables::RESERVED_SYMBOLS;

/// Returns the metadata file name for a language, e.g. `ExprParser.json`.
#[must_use = "returns the file name without side effects"]
pub fn parser_metadata_file(language: &str) -> String {
    format!("{language}Parser.json")
}

/// Metadata emitted by the grammar compiler.
///
/// `symbolic_names` is indexed by raw token type; index 0 is a placeholder
/// slot and real terminals start at index 1. A `null` entry marks a
/// terminal defined without a symbolic name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserMetadata {
    pub symbolic_names: Vec<Option<String>>,
    pub rule_names: Vec<String>,
}

/// Loads parser metadata out of a cache directory.
pub trait MetadataLoader {
    /// # Errors
    ///
    /// Returns an error if the metadata file is missing or malformed.
    fn load(&self, cache_dir: &Path, language: &str) -> Result<ParserMetadata>;
}

/// Reads `<Language>Parser.json` from the cache directory.
#[derive(Debug, Default)]
pub struct JsonMetadataLoader;

impl JsonMetadataLoader {
    fn metadata_path(cache_dir: &Path, language: &str) -> PathBuf {
        cache_dir.join(parser_metadata_file(language))
    }
}

impl MetadataLoader for JsonMetadataLoader {
    fn load(&self, cache_dir: &Path, language: &str) -> Result<ParserMetadata> {
        let path = Self::metadata_path(cache_dir, language);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read parser metadata from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse parser metadata at {}", path.display()))
    }
}

/// Builds the runtime symbol name map from the compiler's symbolic names.
///
/// The map starts with the three synthetic markers, then the real
/// terminals from index 1 of `symbolic_names` onwards. Every present name
/// is dot-prefixed; `None` entries stay `None` so unnamed terminals keep
/// their slot.
#[must_use = "returns the map without side effects"]
pub fn symbol_name_map(symbolic_names: &[Option<String>]) -> Vec<Option<String>> {
    let mut map: Vec<Option<String>> = vec![
        Some("._EPSILON".to_owned()),
        Some("._EOF".to_owned()),
        Some("._INVALID".to_owned()),
    ];
    map.extend(
        symbolic_names
            .iter()
            .skip(1)
            .map(|name| name.as_ref().map(|n| format!(".{n}"))),
    );
    map
}

/// Collects the set of names the compiled grammar actually produces: every
/// rule name plus every named terminal's dotted name. The synthetic marker
/// slots are excluded; they exist in every grammar and are never declared.
#[must_use = "returns the rule set without side effects"]
pub fn generated_rule_set(rule_names: &[String], symbol_name_map: &[Option<String>]) -> Vec<String> {
    let mut set: Vec<String> = rule_names.to_vec();
    set.extend(
        symbol_name_map
            .iter()
            .skip(RESERVED_SYMBOLS)
            .flatten()
            .cloned(),
    );
    set
}
