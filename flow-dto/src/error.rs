//! Error types for encoding, decoding and validating wire shapes

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for flow-dto operations
pub type Result<T> = std::result::Result<T, DtoError>;

#[derive(Error, Debug)]
pub enum DtoError {
    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unknown wire format name
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
