#![warn(clippy::pedantic)]
pub mod language;
pub mod paths;

pub use language::{LanguageCompileConfig, LanguageRuntimeConfig, MatcherSpec};
pub use paths::CachePaths;
