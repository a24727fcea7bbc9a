//! Matcher evaluation over normalized ASTs.

use treeforge_ast::AstNode;

use crate::compiled::CompiledMatcher;

/// A node reported by a matcher, identified by kind and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    /// Name of the matcher that produced the hit.
    pub matcher: String,
    pub kind: String,
    pub begin: usize,
    pub end: usize,
}

/// Runs every matcher over every node of `root`, in tree walk order.
///
/// A matcher hits when its steps can be consumed in order down a chain of
/// parent-to-child edges; the hit reports the node the final step landed
/// on.
#[must_use = "returns hits without side effects"]
pub fn run_matchers(matchers: &[CompiledMatcher], root: &AstNode) -> Vec<MatchHit> {
    let mut hits = Vec::new();
    walk(matchers, root, &mut hits);
    hits
}

fn walk(matchers: &[CompiledMatcher], node: &AstNode, hits: &mut Vec<MatchHit>) {
    for matcher in matchers {
        if let Some(target) = try_match(&matcher.steps, node) {
            hits.push(MatchHit {
                matcher: matcher.name.clone(),
                kind: target.kind.clone(),
                begin: target.begin,
                end: target.end,
            });
        }
    }
    for child in &node.children {
        walk(matchers, child, hits);
    }
}

/// Consumes `steps` starting at `node`, descending one child edge per
/// remaining step. Returns the node the final step accepted.
fn try_match<'a>(steps: &[crate::compiled::MatchStep], node: &'a AstNode) -> Option<&'a AstNode> {
    let (first, rest) = steps.split_first()?;
    if !first.accepts(&node.kind) {
        return None;
    }
    if rest.is_empty() {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| try_match(rest, child))
}
