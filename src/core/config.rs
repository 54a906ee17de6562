//! Tool configuration.
//!
//! `ntpcfg` reads a small TOML file locating the configuration database
//! and setting the log level; every field has a default so the tool runs
//! with no config file at all. CLI flags override file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the tool configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/ntpcfg/ntpcfg.toml";

/// Top-level ntpcfg configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Configuration-database location.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration-database location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the database file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("/var/lib/ntpcfg/config-db.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, else fall back to defaults.
    ///
    /// A missing file is normal (fresh install, tests); a present but
    /// malformed file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "logging.level must be one of {:?}, got: {}",
                valid_levels,
                self.logging.level
            );
        }

        if self.store.path.as_os_str().is_empty() {
            anyhow::bail!("store.path must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[store]
path = "/tmp/ntp-test-db.json"
"#,
        )
        .unwrap();

        assert_eq!(config.store.path, PathBuf::from("/tmp/ntp-test-db.json"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let config: Config = toml::from_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
