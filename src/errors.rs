//! Error types for mcpscout
//!
//! Retrieval failures, bad operation arguments and configuration problems.
//! Parsing never fails, so there is no parse error variant.

use thiserror::Error;

/// Main error type for catalog retrieval and the tool operations
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Upstream answered with a non-success status
    #[error("Catalog request failed with status {status}")]
    Retrieval { status: u16 },

    /// Retrieved document exceeds the configured size limit
    #[error("Catalog document too large: {size} bytes exceeds maximum {max} bytes")]
    DocumentTooLarge { size: usize, max: usize },

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Operation called with an argument it cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ScoutError {
    /// Whether the error came from fetching the catalog document
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            ScoutError::Retrieval { .. }
                | ScoutError::DocumentTooLarge { .. }
                | ScoutError::HttpError(_)
                | ScoutError::IoError(_)
        )
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, ScoutError>;
