use std::path::PathBuf;

use filmmate_core::CatalogError;
use thiserror::Error;

/// Failures reading or writing the data files and settings.
///
/// Nothing is retried: the operation that hit the error is aborted and the
/// error is reported to the user.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error on a data file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be parsed or written
    #[error("Settings error: {0}")]
    Settings(String),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

/// Error returned by catalog and account operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Could not save changes: {0}")]
    Storage(#[from] StorageError),
}

impl OperationError {
    /// The validation error, if this is one.
    pub fn as_catalog(&self) -> Option<&CatalogError> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Storage(_) => None,
        }
    }
}
