use anyhow::{Context as AnyhowContext, Result};
use std::path::{Path, PathBuf};
use vidcat_core::{CatalogConfig, CatalogStore};

/// Application context handed to the session
///
/// Resolves configuration once at startup and owns the store built from it.
pub struct Context {
    pub store: CatalogStore,
    config: CatalogConfig,
}

impl Context {
    /// Create new context from the optional --file argument
    pub fn new(file: Option<PathBuf>) -> Result<Self> {
        // Precedence: CLI arg > environment > built-in default
        let mut config = CatalogConfig::from_env().context("Invalid environment configuration")?;
        if let Some(file) = file {
            config = config
                .with_path(file)
                .context("Invalid --file argument")?;
        }

        let store = CatalogStore::new(&config);
        Ok(Self { store, config })
    }

    /// Path of the backing file
    pub fn catalog_path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
