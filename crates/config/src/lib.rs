use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur in configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Failed to read file: {0}")]
    FileReadError(String),

    #[error("Failed to parse YAML: {0}")]
    YamlParseError(#[from] serde_yaml::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

pub const CONFIG_FILE_VAR: &str = "ASSET_LEDGER_CONFIG_FILE";
pub const DATA_DIR_VAR: &str = "ASSET_LEDGER_DATA_DIR";
pub const LOG_LEVEL_VAR: &str = "ASSET_LEDGER_LOG_LEVEL";
pub const CHANNEL_VAR: &str = "ASSET_LEDGER_CHANNEL";

/// Runtime configuration for the asset ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Directory holding the file-backed world state
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Channel name reported in logs
    #[serde(default = "default_channel")]
    pub channel: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./ledger-data")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_channel() -> String {
    "mychannel".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            channel: default_channel(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from environment variables
    ///
    /// If `ASSET_LEDGER_CONFIG_FILE` names an existing file, that file is
    /// loaded instead.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(config_path) = lookup(CONFIG_FILE_VAR) {
            if Path::new(&config_path).exists() {
                return Self::from_file(&config_path);
            }
            debug!("{} points at missing file {}, using environment", CONFIG_FILE_VAR, config_path);
        }

        let data_dir = lookup(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(level) if level.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    LOG_LEVEL_VAR.to_string(),
                    "log level cannot be empty".to_string(),
                ))
            }
            Some(level) => level,
            None => default_log_level(),
        };

        let channel = lookup(CHANNEL_VAR).unwrap_or_else(default_channel);

        Ok(LedgerConfig {
            data_dir,
            log_level,
            channel,
        })
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileReadError(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::FileReadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: LedgerConfig = serde_yaml::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
