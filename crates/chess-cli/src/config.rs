//! Configuration file loading for the terminal session.
//!
//! Settings come from an optional TOML file; command-line flags are
//! applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured log level is not one of trace, debug, info, warn, error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Session settings.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Print rank and file labels around the board.
    pub labels: bool,
    /// Paint a checkered ANSI background behind the board.
    pub color: bool,
    /// Print a notice when the side to move is in check.
    pub announce_check: bool,
    /// Log level used when no `-v` flag is given.
    pub log_level: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            labels: true,
            color: false,
            announce_check: true,
            log_level: None,
        }
    }
}

impl SessionConfig {
    /// File looked up in the working directory when no path is given.
    pub const DEFAULT_PATH: &'static str = "chess.toml";

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::DEFAULT_PATH`] is
    /// read if present and the defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(Self::DEFAULT_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.log_level()?;
        Ok(config)
    }

    /// Returns the configured log level, if one is set.
    pub fn log_level(&self) -> Result<Option<Level>, ConfigError> {
        self.log_level
            .as_deref()
            .map(|s| {
                s.parse::<Level>()
                    .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
            })
            .transpose()
    }
}
