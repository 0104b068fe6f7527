//! Storage location configuration.
//!
//! The tracker reads where to put its database from an optional `config.toml`
//! and lets the `FLORA_FEED_DB` environment variable override it, so embedders
//! and tests can redirect storage without a file.

use serde::Deserialize;
use std::path::Path;

use crate::db::SqliteStore;
use crate::errors::{Error, Result};

const DATABASE_PATH_ENV: &str = "FLORA_FEED_DB";
const DEFAULT_DATABASE_PATH: &str = "data/flora_feed.sqlite";

/// Configuration structure representing the config.toml file.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Filesystem path of the SQLite database
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StorageConfig {
    /// Returns the effective database path: the `FLORA_FEED_DB` environment
    /// variable when set, the configured path otherwise.
    #[must_use]
    pub fn resolved_database_path(&self) -> String {
        std::env::var(DATABASE_PATH_ENV).unwrap_or_else(|_| self.database_path.clone())
    }

    /// Opens the key-value store at the effective database path.
    pub fn open_store(&self) -> Result<SqliteStore> {
        SqliteStore::open(self.resolved_database_path())
    }
}

/// Loads storage configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StorageConfig> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;

    toml::from_str(&contents).map_err(|e| Error::Config(format!("Failed to parse config.toml: {e}")))
}

/// Loads storage configuration from the default location (./config.toml),
/// falling back to the built-in defaults when the file does not exist.
pub fn load_default_config() -> Result<StorageConfig> {
    if Path::new("config.toml").exists() {
        load_config("config.toml")
    } else {
        Ok(StorageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn parses_storage_config() {
        let config: StorageConfig =
            toml::from_str("database_path = \"/tmp/flora-test.sqlite\"").unwrap();
        assert_eq!(config.database_path, "/tmp/flora-test.sqlite");
    }

    #[test]
    fn missing_path_uses_default() {
        let config: StorageConfig = toml::from_str("").unwrap();
        assert_eq!(config.database_path, "data/flora_feed.sqlite");
    }
}
