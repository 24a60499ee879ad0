//! User configuration loaded from TOML.
//!
//! ```toml
//! catalog_path = "/home/me/papers.json"
//! recommendation_limit = 5
//! log_level = "info"
//!
//! [default_year_range]
//! from = 2020
//! to = 2024
//! ```
//!
//! Every key is optional. A missing file yields the defaults; a file that
//! exists but does not parse is an error.

use crate::criteria::YearRange;
use crate::recommend::RECOMMENDATION_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// JSON catalog to load instead of the built-in seed data.
    pub catalog_path: Option<PathBuf>,
    pub recommendation_limit: usize,
    /// Year range the advanced filter opens with.
    pub default_year_range: YearRange,
    /// Default tracing filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            recommendation_limit: RECOMMENDATION_LIMIT,
            default_year_range: YearRange::DEFAULT,
            log_level: "info".to_string(),
        }
    }
}

impl BrowserConfig {
    /// `<config dir>/scholar/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scholar").join("config.toml"))
    }

    /// Load from `path`, or from [`BrowserConfig::default_path`] when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, origin) = Self::load_with_origin(path)?;
        origin.log();
        Ok(config)
    }

    /// Like [`BrowserConfig::load`], but reports where the values came from
    /// instead of logging it. Used before a subscriber is installed.
    pub fn load_with_origin(path: Option<&Path>) -> Result<(Self, ConfigOrigin), ConfigError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok((Self::default(), ConfigOrigin::NoConfigDir));
        };

        if !path.exists() {
            return Ok((Self::default(), ConfigOrigin::Missing(path)));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok((config, ConfigOrigin::File(path)))
    }

    /// Parse TOML text. Reversed year bounds are swapped.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Where a loaded [`BrowserConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from this file.
    File(PathBuf),
    /// No file at this path; defaults used.
    Missing(PathBuf),
    /// The platform has no config directory; defaults used.
    NoConfigDir,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigOrigin::Missing(path) => {
                tracing::debug!("No config at {:?}, using defaults", path)
            }
            ConfigOrigin::NoConfigDir => {
                tracing::warn!("No config directory on this platform, using defaults")
            }
        }
    }
}
