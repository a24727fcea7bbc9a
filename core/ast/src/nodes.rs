//! Normalized AST node type produced by the builder.

use serde::{Deserialize, Serialize};

/// A normalized, positioned AST node.
///
/// `kind` is either a dotted terminal symbol name (e.g. `".NUMBER"`) or a
/// grammar rule name (e.g. `"expr"`). `begin` and `end` are offsets into the
/// original input, with `end` exclusive; `begin <= end` always holds for
/// builder-produced nodes.
///
/// The field is serialized as `"type"` to match the wire format consumers of
/// the normalized tree expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub begin: usize,
    pub end: usize,
    pub children: Vec<AstNode>,
}

impl AstNode {
    #[must_use]
    pub fn new(kind: impl Into<String>, begin: usize, end: usize) -> Self {
        Self {
            kind: kind.into(),
            begin,
            end,
            children: Vec::new(),
        }
    }

    /// Width of the node's span.
    #[must_use]
    pub fn width(&self) -> usize {
        self.end - self.begin
    }

    /// Returns `true` if this node names a terminal symbol (dotted kind).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type() {
        let node = AstNode::new(".NUMBER", 3, 5);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], ".NUMBER");
        assert_eq!(json["begin"], 3);
        assert_eq!(json["end"], 5);
        assert!(json["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn deserializes_from_type_field() {
        let json = r#"{"type":"expr","begin":0,"end":4,"children":[]}"#;
        let node: AstNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, "expr");
        assert_eq!(node.width(), 4);
    }

    #[test]
    fn terminal_detection_uses_dotted_kind() {
        assert!(AstNode::new(".NUMBER", 0, 1).is_terminal());
        assert!(!AstNode::new("expr", 0, 1).is_terminal());
    }
}
