//! Error types for Verdant

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Verdant operations
#[derive(Debug, Error)]
pub enum VerdantError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timed out after {0}s")]
    Timeout(u64),

    #[error("Status {0}")]
    Status(u16),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Result type alias for Verdant operations
pub type Result<T> = std::result::Result<T, VerdantError>;
