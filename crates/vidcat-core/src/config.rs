// crates/vidcat-core/src/config.rs - Catalog configuration
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--file, or VIDCAT_FILE through clap), applied
//    by the CLI context
// 2. Environment variables (VIDCAT_PRETTY)
// 3. Built-in defaults (youtube.txt in the working directory, compact JSON)
//
// Missing environment variables are not errors. Values that are present but
// unusable are, so a typo does not silently fall back to the default.

use std::path::PathBuf;
use thiserror::Error;

/// Default backing file, relative to the working directory
pub const DEFAULT_CATALOG_FILE: &str = "youtube.txt";

/// Environment variable toggling pretty-printed JSON output
pub const ENV_PRETTY: &str = "VIDCAT_PRETTY";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: expected one of true, false, 1, 0, yes, no")]
    InvalidFlag { key: String, value: String },

    #[error("Catalog file path must not be empty")]
    EmptyPath,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the catalog lives and how it is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backing file path
    pub path: PathBuf,

    /// Pretty-print the JSON array instead of writing it on one line
    pub pretty: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_FILE),
            pretty: false,
        }
    }
}

impl CatalogConfig {
    /// Defaults with the process environment applied on top
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from any key/value source
    ///
    /// The lookup is injected so tests don't have to mutate process-wide
    /// environment variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PRETTY) {
            self.pretty = parse_flag(ENV_PRETTY, &value)?;
        }

        self.validate()
    }

    /// Replace the backing file path (used for the --file argument)
    pub fn with_path(mut self, path: PathBuf) -> ConfigResult<Self> {
        self.path = path;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
