//! Error types for qtab

use thiserror::Error;

/// Main error type for qtab
#[derive(Error, Debug)]
pub enum QTabError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Cannot encode table key: {0}")]
    KeyEncoding(String),

    #[error("Cannot decode table key: {0}")]
    KeyDecoding(String),
}

/// Result type alias for qtab operations
pub type Result<T> = std::result::Result<T, QTabError>;
