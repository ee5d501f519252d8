//! Error types for Trellis operations.
//!
//! Parsing itself never fails: malformed lines are skipped. This module
//! provides [`TrellisError`] for everything around it, such as reading
//! inputs, walking directories, loading configuration and exporting the
//! finished model.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to walk `{}`: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl From<walkdir::Error> for TrellisError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        match err.into_io_error() {
            Some(io_err) if path.as_os_str().is_empty() => Self::Io(io_err),
            Some(io_err) => Self::Walk {
                path,
                message: io_err.to_string(),
            },
            None => Self::Walk {
                path,
                message: "filesystem loop detected".to_string(),
            },
        }
    }
}
