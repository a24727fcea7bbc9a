//! Symbol and rule name tables.
//!
//! The first three symbol slots are reserved for synthetic markers that the
//! parser runtime can emit without them appearing in any grammar: epsilon,
//! end-of-input, and the invalid-token sentinel. Real terminal names start
//! at index [`RESERVED_SYMBOLS`]. All symbol names are dot-prefixed to keep
//! the terminal and rule namespaces disjoint in node kinds.

/// Symbol index of the synthetic epsilon marker.
pub const SYM_EPSILON: usize = 0;

/// Symbol index of the synthetic end-of-input marker.
pub const SYM_EOF: usize = 1;

/// Symbol index of the invalid-token sentinel.
pub const SYM_INVALID: usize = 2;

/// Number of reserved synthetic symbol slots preceding real terminals.
pub const RESERVED_SYMBOLS: usize = 3;

/// Index-to-name tables recovered from a compiled grammar.
///
/// `symbol_name_map` entries are dot-prefixed; a `None` entry marks a
/// terminal the grammar defines without a symbolic name. `rule_name_map`
/// entries are plain rule names in grammar declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameTables {
    pub symbol_name_map: Vec<Option<String>>,
    pub rule_name_map: Vec<String>,
}

impl NameTables {
    #[must_use]
    pub fn new(symbol_name_map: Vec<Option<String>>, rule_name_map: Vec<String>) -> Self {
        Self {
            symbol_name_map,
            rule_name_map,
        }
    }

    /// Looks up the dotted name of a terminal symbol. Returns `None` for
    /// out-of-range indices and for unnamed terminals alike.
    #[must_use]
    pub fn symbol_name(&self, symbol_type: usize) -> Option<&str> {
        self.symbol_name_map
            .get(symbol_type)
            .and_then(|name| name.as_deref())
    }

    /// Looks up a rule name by its grammar declaration index.
    #[must_use]
    pub fn rule_name(&self, rule_index: usize) -> Option<&str> {
        self.rule_name_map.get(rule_index).map(String::as_str)
    }
}
