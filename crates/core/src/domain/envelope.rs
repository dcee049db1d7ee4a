// Response Envelope Domain Model

use crate::error::{ClientError, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INPUT_CHECK_PASSED: &str = "passed";
pub const PROCESSING_SUCCESS: &str = "success";

/// Validation/status metadata wrapped around every result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub input_check: String,
    pub processing_status: String,
    #[serde(default)]
    pub result: Value,
}

/// Outer document: `{"response": {...}}`
#[derive(Debug, Deserialize)]
struct ResponseDocument {
    response: ResponseEnvelope,
}

impl ResponseEnvelope {
    /// Decode raw response bytes
    ///
    /// # Errors
    /// - ServiceError::MalformedResponse if the bytes are not JSON, or the
    ///   `response` object or its status fields are missing
    pub fn decode(bytes: &[u8]) -> Result<Self, ServiceError> {
        serde_json::from_slice::<ResponseDocument>(bytes)
            .map(|doc| doc.response)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))
    }

    /// Validate status fields and unwrap the result
    ///
    /// `input_check` is checked before `processing_status`.
    pub fn into_result(self) -> Result<Value, ClientError> {
        if self.input_check != INPUT_CHECK_PASSED {
            return Err(ClientError::InvalidInput(self.input_check));
        }

        if self.processing_status != PROCESSING_SUCCESS {
            return Err(ServiceError::ProcessingFailed(self.processing_status).into());
        }

        Ok(self.result)
    }
}
