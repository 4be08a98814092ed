//! config
//!
//! Optional user configuration.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$TGO_CONFIG` if set
//! 2. `<user config dir>/tgo/config.toml`
//!
//! A missing file yields defaults; an unreadable or invalid file is a
//! fatal error so that a typo in the config never silently launches the
//! wrong executable.
//!
//! # Example
//!
//! ```toml
//! proc_path = "D:/Tools/TortoiseGit/bin/TortoiseGitProc.exe"
//! extra_args = ["/closeonend:0"]
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TGO_CONFIG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for the schema.
    #[error("could not parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User configuration (all keys optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Explicit path to TortoiseGitProc.exe, overriding autodiscovery.
    pub proc_path: Option<PathBuf>,

    /// Extra TortoiseGitProc tokens appended to every invocation.
    pub extra_args: Vec<String>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// `ConfigError` when a present file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join("tgo").join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
