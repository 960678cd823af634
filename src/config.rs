//! Application configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::SessionConfig;
use crate::types::{Player, BLINK_INTERVAL_MS};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cursor flash period in milliseconds.
    pub blink_interval_ms: u32,
    /// "a" or "b".
    pub first_player: String,
    pub log_file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: BLINK_INTERVAL_MS,
            first_player: Player::A.as_str().to_string(),
            log_file: PathBuf::from("teeko.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Missing file means defaults; a present but broken file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blink_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "blink_interval_ms must be > 0".into(),
            ));
        }
        self.first_player()?;
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation("log_filter must not be empty".into()));
        }
        Ok(())
    }

    pub fn first_player(&self) -> Result<Player, ConfigError> {
        Player::from_str(&self.first_player).ok_or_else(|| {
            ConfigError::Validation(format!(
                "first_player must be \"a\" or \"b\", got {:?}",
                self.first_player
            ))
        })
    }

    /// The part of the configuration the engine cares about.
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        self.validate()?;
        Ok(SessionConfig {
            blink_interval_ms: self.blink_interval_ms,
            first_player: self.first_player()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session_config().unwrap(), SessionConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml("first_player = \"b\"").unwrap();
        assert_eq!(config.first_player().unwrap(), Player::B);
        assert_eq!(config.blink_interval_ms, BLINK_INTERVAL_MS);
    }

    #[test]
    fn rejects_zero_blink_and_unknown_player() {
        assert!(matches!(
            AppConfig::from_toml("blink_interval_ms = 0"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("first_player = \"c\""),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("blink_interval_ms = \"fast\""),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
