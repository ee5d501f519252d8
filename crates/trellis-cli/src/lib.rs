//! CLI logic for the Trellis model compiler.
//!
//! This module contains the core CLI logic: load configuration, compile
//! the input into a model, and write the model as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use trellis::{ModelCompiler, TrellisError, export};

/// Run the Trellis CLI application
///
/// This function compiles the input directory or file into a model and
/// writes the model as JSON to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - Configuration loading errors
/// - Directory traversal errors
/// - File I/O errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Compiling model"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Compile the model
    let compiler = ModelCompiler::new(app_config);
    let model = compiler.compile_path(&args.input)?;

    // Write output file
    let json = export::to_json(&model)?;
    fs::write(&args.output, json)?;

    info!(output_file = args.output, entities_count = model.len(); "Model exported successfully");

    Ok(())
}
