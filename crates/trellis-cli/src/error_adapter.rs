//! Error adapter for converting TrellisError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! type and miette's rich report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use trellis::TrellisError;

/// Adapter rendering a [`TrellisError`] as a miette diagnostic.
///
/// Trellis errors carry no source spans (parsing never fails), so the
/// adapter contributes an error code and, where useful, help text.
pub struct ErrorAdapter<'a>(pub &'a TrellisError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrellisError::Io(_) => "trellis::io",
            TrellisError::Walk { .. } => "trellis::walk",
            TrellisError::Config(_) => "trellis::config",
            TrellisError::Export(_) => "trellis::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TrellisError::Walk { .. } => "check that the input path exists and is readable",
            TrellisError::Config(_) => "check the configuration file path and its TOML syntax",
            TrellisError::Io(_) | TrellisError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`TrellisError`] into a reportable miette diagnostic.
pub fn to_reportable(err: &TrellisError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let io_err = TrellisError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let walk_err = TrellisError::Walk {
            path: PathBuf::from("diagrams"),
            message: "permission denied".to_string(),
        };
        let config_err = TrellisError::Config("bad".to_string());

        assert_eq!(
            to_reportable(&io_err).code().unwrap().to_string(),
            "trellis::io"
        );
        assert_eq!(
            to_reportable(&walk_err).code().unwrap().to_string(),
            "trellis::walk"
        );
        assert_eq!(
            to_reportable(&config_err).code().unwrap().to_string(),
            "trellis::config"
        );
    }

    #[test]
    fn test_display_matches_error() {
        let err = TrellisError::Walk {
            path: PathBuf::from("diagrams"),
            message: "permission denied".to_string(),
        };

        assert_eq!(
            to_reportable(&err).to_string(),
            "Failed to walk `diagrams`: permission denied"
        );
    }

    #[test]
    fn test_help_only_where_actionable() {
        let io_err = TrellisError::Io(io::Error::other("disk"));
        assert!(to_reportable(&io_err).help().is_none());

        let config_err = TrellisError::Config("bad".to_string());
        assert!(to_reportable(&config_err).help().is_some());
    }

    #[test]
    fn test_report_renders() {
        let err = TrellisError::Config("Missing configuration file: x.toml".to_string());
        let reporter =
            miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
        let mut out = String::new();
        reporter
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();

        assert!(out.contains("trellis::config"));
        assert!(out.contains("Missing configuration file"));
    }
}
