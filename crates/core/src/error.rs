// Central Error Type for the Client

use crate::port::TransportError;
use thiserror::Error;

/// Client-level error type
///
/// Call-shape variants (`UnknownMethod`, `ArgumentCountMismatch`,
/// `UnexpectedArgument`) are raised before any I/O happens.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("{method} expected {expected} arguments, got {actual}")]
    ArgumentCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("{method} got an unexpected keyword argument '{argument}'")]
    UnexpectedArgument { method: String, argument: String },

    /// Server rejected the supplied data (`input_check != "passed"`)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Reported `input_check` value, if this is an `InvalidInput` error
    pub fn input_check(&self) -> Option<&str> {
        match self {
            ClientError::InvalidInput(check) => Some(check),
            _ => None,
        }
    }

    pub fn is_service_error(&self) -> bool {
        matches!(self, ClientError::Service(_))
    }
}

/// Failures attributable to the remote service or the path to it
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Error connecting to webservice. {0}")]
    Transport(#[from] TransportError),

    #[error("Couldn't decode response from webservice. {0}")]
    MalformedResponse(String),

    /// `processing_status` was not `"success"`; carries the reported value
    #[error("{0}")]
    ProcessingFailed(String),
}

impl ServiceError {
    /// HTTP status code, when the transport reported one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Transport(TransportError::Status { code, .. }) => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Service(ServiceError::Transport(err))
    }
}
