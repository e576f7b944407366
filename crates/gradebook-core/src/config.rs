//! Store configuration for gradebook
//!
//! Configuration is stored in `.gradebook/config.toml`. Every key is
//! optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Average cutoff used by `report` when none is given
pub const DEFAULT_REPORT_THRESHOLD: f64 = 80.0;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Database file name, relative to the store root
    #[serde(default = "default_database")]
    pub database: String,

    /// Default average threshold for the at-or-above report
    #[serde(default = "default_report_threshold")]
    pub report_threshold: f64,

    /// Use SQLite write-ahead logging
    #[serde(default = "default_wal")]
    pub wal: bool,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_database() -> String {
    "gradebook.db".to_string()
}

fn default_report_threshold() -> f64 {
    DEFAULT_REPORT_THRESHOLD
}

fn default_wal() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            database: default_database(),
            report_threshold: default_report_threshold(),
            wal: default_wal(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = STORE_FORMAT_VERSION,
                "config written by a newer gradebook"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GradeError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.version, STORE_FORMAT_VERSION);
        assert_eq!(config.database, "gradebook.db");
        assert_eq!(config.report_threshold, 80.0);
        assert!(config.wal);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = StoreConfig {
            report_threshold: 75.5,
            wal: false,
            ..StoreConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "report_threshold = 90.0\n").unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded.report_threshold, 90.0);
        assert_eq!(loaded.database, "gradebook.db");
        assert!(loaded.wal);
    }

    #[test]
    fn test_malformed_config_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "report_threshold = \"high\"\n").unwrap();

        let err = StoreConfig::load(&path).unwrap_err();
        assert!(matches!(err, GradeError::Toml(_)));
    }
}
