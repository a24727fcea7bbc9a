//! Recursive parse-tree to AST normalization.
//!
//! The builder walks a [`ParseTree`] bottom-up, resolving indices to names
//! through [`NameTables`], computing exclusive spans, and threading every
//! rule node through its declared finalizer chain. Span laws:
//!
//! * terminal: `end = stop.unwrap_or(start) + 1`
//! * rule with children: `end` is the last built child's `end`
//! * childless rule: `end = start + 1`
//!
//! Invalid-token sentinels are reported through the fault callback and then
//! normalized like any other terminal, so one bad token never aborts the
//! walk.

use rustc_hash::FxHashMap;

use crate::errors::BuildError;
use crate::finalize::RuleOptions;
use crate::nodes::AstNode;
use crate::tables::{NameTables, SYM_INVALID};
use crate::tree::ParseTree;

/// A recoverable problem observed during the walk, positioned like the
/// node that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFault {
    pub message: String,
    pub begin: usize,
    pub end: usize,
}

/// Builds a normalized AST from `tree`.
///
/// `rules` maps rule names to their declared options; every rule the tree
/// produces must have an entry. Faults are delivered to `on_fault` as they
/// are encountered, in walk order.
///
/// # Errors
///
/// Returns [`BuildError`] when an index cannot be resolved or a produced
/// rule has no configuration.
pub fn build_ast(
    tree: &ParseTree,
    tables: &NameTables,
    rules: &FxHashMap<String, RuleOptions>,
    on_fault: &mut dyn FnMut(ParseFault),
) -> Result<AstNode, BuildError> {
    match tree {
        ParseTree::Terminal {
            symbol_type,
            start,
            stop,
        } => {
            let kind = tables
                .symbol_name(*symbol_type)
                .ok_or(BuildError::UnknownSymbol {
                    symbol_type: *symbol_type,
                })?
                .to_owned();
            let end = stop.unwrap_or(*start) + 1;
            if *symbol_type == SYM_INVALID {
                on_fault(ParseFault {
                    message: format!("invalid token at {start}"),
                    begin: *start,
                    end,
                });
            }
            Ok(AstNode::new(kind, *start, end))
        }
        ParseTree::Rule {
            rule_index,
            start,
            children,
        } => {
            let kind = tables
                .rule_name(*rule_index)
                .ok_or(BuildError::UnknownRule {
                    rule_index: *rule_index,
                })?
                .to_owned();
            let options = rules
                .get(&kind)
                .ok_or_else(|| BuildError::MissingRuleConfig { kind: kind.clone() })?;

            let mut built = Vec::with_capacity(children.len());
            for child in children.iter().flatten() {
                built.push(build_ast(child, tables, rules, on_fault)?);
            }
            let end = built.last().map_or(*start + 1, |last| last.end);

            let node = AstNode {
                kind,
                begin: *start,
                end,
                children: built,
            };
            Ok(options.finalize(node))
        }
    }
}
