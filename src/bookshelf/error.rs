use std::path::PathBuf;
use thiserror::Error;

/// The underlying cause of a failed load or save.
#[derive(Error, Debug)]
pub enum StorageFailure {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read library from {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },

    #[error("Could not save library to {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn read(path: impl Into<PathBuf>, source: impl Into<StorageFailure>) -> Self {
        CatalogError::StorageRead {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<StorageFailure>) -> Self {
        CatalogError::StorageWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
