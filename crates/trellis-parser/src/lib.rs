//! # Trellis Parser
//!
//! Compiles line-oriented class diagram text into a cross-referenced
//! [`Model`] of classes and interfaces.
//!
//! The input is informal: `namespace` and `class`/`interface` blocks hold
//! visibility-marked member and method lines, and relation lines connect
//! entities with arrow tokens. Parsing is best effort. Lines that match no
//! construct are skipped and nothing is ever rejected.
//!
//! ## Usage
//!
//! ```
//! # use trellis_parser::{parse, ParseConfig};
//! let source = r#"
//!     namespace app {
//!       interface Shape {
//!         +area(): float
//!       }
//!     }
//!     Circle --|> Shape
//! "#;
//!
//! let model = parse([("shapes.puml", source)], ParseConfig::default());
//!
//! let shape = model.get("Shape").unwrap();
//! assert_eq!(shape.include_guard(), "APP_SHAPE_H");
//! assert_eq!(model.get("Circle").unwrap().implements(), ["Shape"]);
//! ```

mod builder;
mod config;
mod extract;
mod resolve;
mod scanner;
mod scope;
mod symbols;

pub use builder::{ModelBuilder, SourceStats};
pub use config::{DEFAULT_NAMESPACE_SEPARATOR, ParseConfig};
pub use scanner::{COMMENT_MARKER, LineEvent, TypeOpen, scan_line};
pub use symbols::SymbolTable;

use trellis_core::semantic::Model;

/// Parse a sequence of sources into a model.
///
/// Sources are `(source_id, text)` pairs folded in iteration order into a
/// single [`ModelBuilder`].
///
/// # Arguments
///
/// * `sources` - The sources to compile, in order
/// * `config` - Parser configuration
pub fn parse<'a, I>(sources: I, config: ParseConfig) -> Model
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut builder = ModelBuilder::new(config);
    for (source_id, text) in sources {
        builder.parse_source(source_id, text);
    }
    builder.finish()
}
