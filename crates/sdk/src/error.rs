//! SDK Error Types

use thiserror::Error;
use wrservices_core::ClientError;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected result shape: {0}")]
    Decode(String),
}

impl SdkError {
    /// Underlying client error, if the failure came from a call
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            SdkError::Client(err) => Some(err),
            _ => None,
        }
    }
}

impl From<wrservices_core::TransportError> for SdkError {
    fn from(e: wrservices_core::TransportError) -> Self {
        SdkError::Connection(e.to_string())
    }
}
