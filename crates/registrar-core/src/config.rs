//! Application configuration
//!
//! Loaded from an optional TOML file (`registrar.toml` by default); a
//! missing file falls back to defaults, a present-but-invalid file is an
//! error. Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{RegistrarError, Result};

/// Runtime configuration for a registrar session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the three data files
    pub data_dir: PathBuf,

    /// Directory backups are written under
    pub backup_dir: PathBuf,

    /// Credit ceiling enforced at enrollment time
    pub max_credits: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            backup_dir: PathBuf::from("backups"),
            max_credits: 24,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// * `InvalidConfig` - If the text is not valid TOML for this schema
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RegistrarError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Load the configuration from a file, falling back to defaults when
    /// the file is absent
    ///
    /// # Errors
    /// * `InvalidConfig` - If the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(RegistrarError::InvalidConfig {
                reason: format!("failed to read {}: {}", path.display(), e),
            }),
        }
    }
}
