//! Application Config Module
//! Optional JSON config named by `DATA_VISUALIZER_CONFIG`; every field has a default.

use crate::data::DEFAULT_SEED;
use crate::params::DashboardProfile;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable holding the config file path
pub const CONFIG_ENV_VAR: &str = "DATA_VISUALIZER_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: DashboardProfile,
    pub seed: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: DashboardProfile::Simple,
            seed: DEFAULT_SEED,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load from the path in [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn load() -> Self {
        let Ok(path) = env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                info!(path = %path, profile = %config.profile, "loaded config");
                config
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
