// crates/panel-trading-client/src/config.rs

//! Client configuration, read from a TOML file.
//!
//! The file is optional. Its path is `panel.toml` in the working directory
//! unless `PANEL_CONFIG` points elsewhere.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "PANEL_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "panel.toml";

#[derive(Debug, Error)]
pub enum ClientConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration for the order panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Append-only log file.
    pub log_file: PathBuf,
    /// Symbol selected after the symbol list loads, if listed.
    pub default_symbol: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("bot.log"),
            default_symbol: "BTCUSDT".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, ClientConfigError> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(path)
    }

    /// A missing file yields the defaults; anything else unreadable is an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ClientConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&contents).map_err(|source| ClientConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
