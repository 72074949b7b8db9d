//! # Store Errors

/// Errors raised by the store itself, independent of the record type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    Closed,
    #[error("Store actor dropped response channel")]
    Dropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}
