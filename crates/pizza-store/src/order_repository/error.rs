//! Error types for order operations.

use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The create-order request is missing a field or is malformed.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// No order has the requested id.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order store failed or is unreachable.
    #[error("Order store error: {0}")]
    Internal(String),
}

impl From<StoreError> for OrderError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Internal(other.to_string()),
        }
    }
}
