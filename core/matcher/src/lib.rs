#![warn(clippy::pedantic)]

//! Tree matchers for normalized ASTs.
//!
//! Matchers are compiled once per language, at grammar-compile time, into
//! serializable [`CompiledMatcher`] data that is stored in the runtime
//! modifier artifact. At runtime the [`engine`] evaluates that data over
//! built ASTs; no matcher code is generated or loaded dynamically.

pub mod compile;
pub mod compiled;
pub mod engine;
pub mod errors;

pub use compile::{MatcherCompiler, PathMatcherCompiler, SpecGenerator};
pub use compiled::{CompiledMatcher, MatchStep};
pub use engine::{MatchHit, run_matchers};
pub use errors::MatcherError;
