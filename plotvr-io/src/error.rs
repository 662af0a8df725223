//! Error types for data loading

use thiserror::Error;

/// Errors that can occur while locating or fetching a dataset
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported location: {location}")]
    UnsupportedLocation { location: String },

    #[error("Invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Loader worker could not start: {message}")]
    WorkerSpawn { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IoError> for plotvr_core::Error {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Io(io) => plotvr_core::Error::Io(io),
            IoError::InvalidEndpoint { .. } => plotvr_core::Error::InvalidEndpoint(err.to_string()),
            IoError::WorkerSpawn { .. } => plotvr_core::Error::ChannelClosed(err.to_string()),
            other => plotvr_core::Error::InvalidData(other.to_string()),
        }
    }
}
