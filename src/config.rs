//! Configuration for locating the lexical database.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WnjaError};

/// Language tag of Japanese rows in the Japanese WordNet.
pub const DEFAULT_LANGUAGE: &str = "jpn";

/// Environment variable naming the database file.
pub const DATABASE_ENV: &str = "WNJA_DB";

/// Settings shared by the library and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WnjaConfig {
    /// Path to the WordNet SQLite file (e.g. `wordnet/wnjpn.db`).
    pub database_path: Option<PathBuf>,
    /// Language used for definitions and member filtering.
    pub language: String,
}

impl Default for WnjaConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl WnjaConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WnjaError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: WnjaConfig = serde_json::from_str(&content).map_err(|e| {
            WnjaError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the database path.
    pub fn with_database_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set the language tag.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Apply overrides that take precedence over the file values.
    ///
    /// `None` leaves the current value in place.
    pub fn merge(mut self, database_path: Option<PathBuf>, language: Option<String>) -> Self {
        if let Some(path) = database_path {
            self.database_path = Some(path);
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }

    /// The database path, or a configuration error when unset.
    pub fn require_database_path(&self) -> Result<&Path> {
        self.database_path.as_deref().ok_or_else(|| {
            WnjaError::config(format!(
                "no lexical database configured; pass --db or set {DATABASE_ENV}"
            ))
        })
    }

    /// Check the values that can be checked without touching the store.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(WnjaError::config("language must not be empty"));
        }
        self.require_database_path()?;
        Ok(())
    }
}
