//! Spec-to-matcher compilation.
//!
//! A [`MatcherCompiler`] is prepared once per language from its compile and
//! runtime configurations, then invoked per spec through the generator it
//! returns. The default [`PathMatcherCompiler`] validates each spec step
//! against the declared rule schema before emitting steps, so a typo in a
//! spec fails at compile time rather than silently never matching.

use treeforge_config::{LanguageCompileConfig, LanguageRuntimeConfig, MatcherSpec};

use crate::compiled::{CompiledMatcher, MatchStep};
use crate::errors::MatcherError;

/// Compiles one spec into matcher data.
pub type SpecGenerator = dyn Fn(&MatcherSpec) -> Result<CompiledMatcher, MatcherError>;

/// Prepares per-language spec generators.
pub trait MatcherCompiler {
    /// Builds a generator closed over the language's configurations.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError`] when the configurations cannot support
    /// matcher compilation.
    fn make_generator(
        &self,
        compile_config: &LanguageCompileConfig,
        runtime_config: &LanguageRuntimeConfig,
    ) -> Result<Box<SpecGenerator>, MatcherError>;
}

/// Default compiler: each spec path step must name a declared rule or
/// dotted terminal, or be the `"*"` wildcard.
#[derive(Debug, Default)]
pub struct PathMatcherCompiler;

impl MatcherCompiler for PathMatcherCompiler {
    fn make_generator(
        &self,
        _compile_config: &LanguageCompileConfig,
        runtime_config: &LanguageRuntimeConfig,
    ) -> Result<Box<SpecGenerator>, MatcherError> {
        let declared: Vec<String> = runtime_config.rules.keys().cloned().collect();
        Ok(Box::new(move |spec| {
            if spec.path.is_empty() {
                return Err(MatcherError::EmptySpec {
                    name: spec.name.clone(),
                });
            }
            let mut steps = Vec::with_capacity(spec.path.len());
            for step in &spec.path {
                if step == "*" {
                    steps.push(MatchStep::Any);
                } else if declared.iter().any(|name| name == step) {
                    steps.push(MatchStep::Kind(step.clone()));
                } else {
                    return Err(MatcherError::UnknownRuleInSpec {
                        spec: spec.name.clone(),
                        step: step.clone(),
                    });
                }
            }
            Ok(CompiledMatcher::new(spec.name.clone(), steps))
        }))
    }
}
