//! Rule schema validation.
//!
//! The declared rule schema (the runtime configuration's rule map keys)
//! must name exactly the set of rules and named terminals the compiled
//! grammar produces. Missing declarations are reported before extra ones,
//! each with the full sorted list of offending names.

use thiserror::Error;

/// Disagreement between the compiled grammar and the declared rule schema.
#[must_use = "errors must not be silently ignored"]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The grammar produces rules the schema never declares.
    #[error("rule schema is missing declarations for: {}", .rules.join(", "))]
    MissingRules { rules: Vec<String> },

    /// The schema declares rules the grammar never produces.
    #[error("rule schema declares unknown rules: {}", .rules.join(", "))]
    ExtraRules { rules: Vec<String> },
}

/// Validates the declared schema against the generated rule set.
///
/// # Errors
///
/// Returns [`SchemaError::MissingRules`] when `generated` contains names
/// absent from `declared`; only when there are none, returns
/// [`SchemaError::ExtraRules`] for names declared but never generated.
/// Offending names are sorted in both cases.
pub fn validate_rule_schema(generated: &[String], declared: &[String]) -> Result<(), SchemaError> {
    let mut missing: Vec<String> = generated
        .iter()
        .filter(|name| !declared.contains(name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(SchemaError::MissingRules { rules: missing });
    }

    let mut extra: Vec<String> = declared
        .iter()
        .filter(|name| !generated.contains(name))
        .cloned()
        .collect();
    if !extra.is_empty() {
        extra.sort();
        return Err(SchemaError::ExtraRules { rules: extra });
    }

    Ok(())
}
