//! Trellis - compile class diagram sources into an architecture model.
//!
//! Reads line-oriented class diagram text (`namespace`, `class` and
//! `interface` blocks with member, method and relation lines), merges the
//! declarations contributed by every input file, and produces one
//! cross-referenced [`semantic::Model`] for renderers to consume.

pub mod config;
pub mod export;

mod error;

pub use trellis_core::semantic;

pub use error::TrellisError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, trace};
use walkdir::WalkDir;

use trellis_parser::ModelBuilder;

use config::AppConfig;
use semantic::Model;

/// Compiler from diagram sources to a [`Model`].
///
/// # Examples
///
/// ```rust
/// use trellis::{ModelCompiler, config::AppConfig};
///
/// let compiler = ModelCompiler::new(AppConfig::default());
///
/// let model = compiler.compile_sources([
///     ("shape.puml", "interface Shape {\n+area(): float\n}"),
///     ("circle.puml", "Circle --|> Shape"),
/// ]);
///
/// let circle = model.get("Circle").expect("Circle is referenced");
/// assert_eq!(circle.implements(), ["Shape"]);
///
/// // Or use default config
/// let compiler = ModelCompiler::default();
/// ```
#[derive(Default)]
pub struct ModelCompiler {
    config: AppConfig,
}

impl ModelCompiler {
    /// Create a new compiler with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including input and model settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Compile in-memory sources into a model.
    ///
    /// Sources are `(source_id, text)` pairs and are folded in the given
    /// order; that order decides entity kinds and list order in the model.
    ///
    /// # Arguments
    ///
    /// * `sources` - Source identifiers and contents
    pub fn compile_sources<'a, I>(&self, sources: I) -> Model
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut builder = ModelBuilder::new(self.config.parse_config());
        for (source_id, text) in sources {
            builder.parse_source(source_id, text);
        }
        builder.finish()
    }

    /// Compile every diagram source under `root` into a model.
    ///
    /// `root` may be a directory, walked recursively for files with the
    /// configured extension, or a single file. Files are read and folded
    /// one at a time, in file-name order.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory or file to compile
    ///
    /// # Errors
    ///
    /// Returns `TrellisError` for:
    /// - Directory traversal errors
    /// - File read errors
    pub fn compile_path(&self, root: impl AsRef<Path>) -> Result<Model, TrellisError> {
        let root = root.as_ref();
        info!(root = root.display().to_string(); "Compiling model");

        let files = self.discover(root)?;
        info!(files_count = files.len(); "Discovered diagram sources");

        let mut builder = ModelBuilder::new(self.config.parse_config());
        for path in &files {
            let source_id = path.display().to_string();
            let text = fs::read_to_string(path)?;
            let stats = builder.parse_source(&source_id, &text);
            trace!(source = source_id, stats:?; "Folded source");
        }

        let model = builder.finish();
        info!(entities_count = model.len(); "Model compiled");
        Ok(model)
    }

    /// Returns the configuration this compiler was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, TrellisError> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let input = self.config.input();
        let mut files = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(input.follow_links())
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(input.extension()) {
                debug!(path = path.display().to_string(); "Found diagram source");
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }
}
