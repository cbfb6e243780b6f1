//! Error types for customizer operations.

use thiserror::Error;

/// Result type for customizer operations.
pub type CustomizeResult<T> = Result<T, CustomizeError>;

/// Errors that can occur in customizer operations.
#[derive(Debug, Error)]
pub enum CustomizeError {
    /// Object not found in the scene.
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Invalid operation on an object.
    #[error("Invalid operation on object: {0}")]
    InvalidOperation(String),

    /// Product face index out of range.
    #[error("Unknown product face: {0}")]
    UnknownFace(usize),

    /// Scene serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
