//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Cannot read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of products.
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The products parse but break a catalog rule.
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}
