//! Parser configuration.

/// Default separator between segments of a qualified name in the model.
pub const DEFAULT_NAMESPACE_SEPARATOR: &str = "::";

/// Configuration for building a model from diagram sources.
///
/// # Example
///
/// ```
/// # use trellis_parser::ParseConfig;
/// let config = ParseConfig::default().with_namespace_separator(".");
/// assert_eq!(config.namespace_separator(), ".");
/// ```
#[derive(Debug, Clone)]
pub struct ParseConfig {
    namespace_separator: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            namespace_separator: DEFAULT_NAMESPACE_SEPARATOR.to_string(),
        }
    }
}

impl ParseConfig {
    /// Sets the separator that qualified names in `extends` and
    /// `implements` clauses are rewritten to.
    pub fn with_namespace_separator(mut self, separator: impl Into<String>) -> Self {
        self.namespace_separator = separator.into();
        self
    }

    pub fn namespace_separator(&self) -> &str {
        &self.namespace_separator
    }
}
