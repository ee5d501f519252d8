//! Configuration types for Trellis model compilation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.input().extension(), "puml");
//! assert_eq!(config.model().namespace_separator(), "::");
//! ```

use serde::Deserialize;

use trellis_parser::{DEFAULT_NAMESPACE_SEPARATOR, ParseConfig};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input selection section.
    #[serde(default)]
    input: InputConfig,

    /// Model construction section.
    #[serde(default)]
    model: ModelConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(input: InputConfig, model: ModelConfig) -> Self {
        Self { input, model }
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }

    /// Returns the model configuration.
    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Builds the parser configuration these settings describe.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::default().with_namespace_separator(self.model.namespace_separator.clone())
    }
}

/// Which files a directory walk selects.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// File extension of diagram sources, without the dot.
    #[serde(default = "default_extension")]
    extension: String,

    /// Whether symbolic links are followed while walking.
    #[serde(default)]
    follow_links: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            follow_links: false,
        }
    }
}

impl InputConfig {
    /// Creates a new [`InputConfig`].
    ///
    /// # Arguments
    ///
    /// * `extension` - File extension of diagram sources, without the dot.
    /// * `follow_links` - Whether symbolic links are followed.
    pub fn new(extension: impl Into<String>, follow_links: bool) -> Self {
        Self {
            extension: extension.into(),
            follow_links,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn follow_links(&self) -> bool {
        self.follow_links
    }
}

/// How the model is shaped.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Separator written between segments of qualified names.
    #[serde(default = "default_namespace_separator")]
    namespace_separator: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            namespace_separator: default_namespace_separator(),
        }
    }
}

impl ModelConfig {
    pub fn new(namespace_separator: impl Into<String>) -> Self {
        Self {
            namespace_separator: namespace_separator.into(),
        }
    }

    pub fn namespace_separator(&self) -> &str {
        &self.namespace_separator
    }
}

fn default_extension() -> String {
    "puml".to_string()
}

fn default_namespace_separator() -> String {
    DEFAULT_NAMESPACE_SEPARATOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.input().extension(), "puml");
        assert!(!config.input().follow_links());
        assert_eq!(config.model().namespace_separator(), "::");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            extension = "uml"

            [model]
            namespace_separator = "."
            "#,
        )
        .unwrap();

        assert_eq!(config.input().extension(), "uml");
        assert!(!config.input().follow_links());
        assert_eq!(config.parse_config().namespace_separator(), ".");
    }
}
