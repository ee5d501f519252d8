//! Configuration file loading for the CLI
//!
//! An explicit `--config` path always wins. Otherwise the first existing
//! file among the discovery candidates is used, and the built-in defaults
//! apply when there is none.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use trellis::{TrellisError, config::AppConfig};

/// Project-local configuration path, relative to the working directory.
const LOCAL_CONFIG_PATH: &str = "trellis/config.toml";

/// File name looked up in the platform configuration directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for TrellisError {
    fn from(err: ConfigError) -> Self {
        TrellisError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Named by `--config`.
    Explicit,
    /// `trellis/config.toml` under the working directory.
    Local,
    /// The platform configuration directory.
    System,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::Local => "local",
            Self::System => "system",
        })
    }
}

/// Loads the application configuration.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns `TrellisError::Config` if the explicit path does not exist or
/// the selected file is not valid configuration TOML, and
/// `TrellisError::Io` if it cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TrellisError> {
    if let Some(path) = explicit_path {
        return load_config_file(ConfigSource::Explicit, path.as_ref());
    }

    let candidates = [
        (ConfigSource::Local, Some(PathBuf::from(LOCAL_CONFIG_PATH))),
        (ConfigSource::System, system_config_path()),
    ];
    match first_existing(candidates) {
        Some((source, path)) => load_config_file(source, &path),
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

fn system_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "trellis", "trellis");
    if dirs.is_none() {
        debug!("Could not determine platform-specific config directory");
    }
    dirs.map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Returns the first candidate whose file exists, in candidate order.
fn first_existing<I>(candidates: I) -> Option<(ConfigSource, PathBuf)>
where
    I: IntoIterator<Item = (ConfigSource, Option<PathBuf>)>,
{
    candidates
        .into_iter()
        .filter_map(|(source, path)| path.map(|path| (source, path)))
        .find(|(source, path)| {
            let found = path.is_file();
            debug!(
                source:% = source,
                path = path.display().to_string(),
                found;
                "Checked configuration candidate"
            );
            found
        })
}

fn load_config_file(source: ConfigSource, path: &Path) -> Result<AppConfig, TrellisError> {
    info!(source:% = source, path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TrellisError::from(ConfigError::MissingFile(path.to_path_buf())),
        _ => TrellisError::Io(err),
    })?;

    toml::from_str(&content).map_err(|err| TrellisError::from(ConfigError::Parse(err.to_string())))
}
