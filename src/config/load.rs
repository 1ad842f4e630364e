use std::{env, path::PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use super::schema::Config;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Loads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match resolve_config_path() {
            Some(path) if path.exists() => Self::from_path(path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var("SIDETUNE_ENDPOINT") {
            self.api.endpoint = endpoint;
        }
        if let Ok(asset_base) = env::var("SIDETUNE_ASSET_BASE") {
            self.api.asset_base = asset_base;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(ConfigError::Invalid(
                "audio.volume must be within 0.0..=1.0".to_string(),
            ));
        }
        if self.audio.volume_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "audio.volume_step must be positive".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 || self.probe.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

/// `SIDETUNE_CONFIG` if set, the platform config dir otherwise.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("SIDETUNE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    default_config_path()
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "sidetune", "sidetune")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
