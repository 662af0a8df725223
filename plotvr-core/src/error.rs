//! Error types for plotvr

use thiserror::Error;

/// Main error type for plotvr operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Matrix is not invertible: {0}")]
    SingularMatrix(String),

    #[error("Graphics error: {0}")]
    Graphics(String),

    #[error("Channel closed: {0}")]
    ChannelClosed(String),
}

/// Result type alias for plotvr operations
pub type Result<T> = std::result::Result<T, Error>;
