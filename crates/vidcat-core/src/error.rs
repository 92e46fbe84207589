// crates/vidcat-core/src/error.rs - Catalog error taxonomy

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading, validating or persisting the catalog
///
/// Two families live side by side here:
/// - Validation failures (`InvalidPosition`): expected user-input conditions.
///   The catalog is untouched and the session keeps going.
/// - Environment failures (`Malformed`, `Io`): the backing file could not be
///   read or written. Fatal at startup, surfaced to the user afterwards.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid position {position}: catalog holds {len} record(s)")]
    InvalidPosition { position: usize, len: usize },

    #[error("Malformed catalog file {file}: {error}")]
    Malformed { file: String, error: String },

    #[error("I/O error on catalog file {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// True for recoverable user-input failures, false for environment failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPosition { .. })
    }

    pub(crate) fn io(file: &Path, source: std::io::Error) -> Self {
        Self::Io {
            file: file.display().to_string(),
            source,
        }
    }

    pub(crate) fn malformed(file: &Path, error: impl ToString) -> Self {
        Self::Malformed {
            file: file.display().to_string(),
            error: error.to_string(),
        }
    }
}
