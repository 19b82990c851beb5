//! Error types for the item registry.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, ItemsError>;

/// Errors that can occur during registry operations.
#[derive(Error, Debug)]
pub enum ItemsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}
