//! Configuration file loading for the chess shell.
//!
//! Settings come from `chess.toml`; every field is optional and command-line
//! flags override whatever the file says.

use chess_core::Placement;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Places searched for a config file when none is given explicitly.
const SEARCH_PATHS: [&str; 2] = ["chess.toml", "../chess.toml"];

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Board placement the session starts from.
    pub placement: String,
    /// Draw pieces with Unicode chess glyphs instead of letters.
    pub unicode: bool,
    /// After an illegal destination, list where the piece could have gone.
    pub show_legal_moves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placement: Placement::STARTPOS.to_string(),
            unicode: true,
            show_legal_moves: true,
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the first of
    /// `chess.toml` and `../chess.toml` that exists is used, falling back to
    /// defaults when neither does.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::read(path);
        }

        for candidate in SEARCH_PATHS {
            let candidate = Path::new(candidate);
            if candidate.exists() {
                return Self::read(candidate);
            }
        }

        tracing::debug!("No chess.toml found, using defaults");
        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses TOML content; missing fields take their defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
