//! Output configuration types

/// Four spaces per depth level.
const DEFAULT_INDENT_UNIT: &str = "    ";

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// String repeated once per depth level in front of every name.
    pub indent_unit: String,
}

impl OutputConfig {
    /// Leading whitespace for a node at `depth`.
    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}
