// Transport Port
// Abstraction over the single HTTP round trip a call needs

use thiserror::Error;

/// Transport errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Server answered with a non-2xx status
    #[error("HTTP-{code}: {message}")]
    Status { code: u16, message: String },

    /// Connection could not be made or was lost mid-request
    #[error("{0}")]
    Connection(String),
}

/// Transport trait
///
/// Implementations:
/// - HttpTransport (infra-http): blocking reqwest client
/// - MockTransport: canned responses for tests
///
/// `body` is `None` for read calls (GET framing) and carries the
/// URL-encoded parameter set for mutating calls (POST framing).
/// Timeouts and cancellation belong to the implementation.
pub trait Transport: Send + Sync {
    /// Send one request and return the raw response body
    ///
    /// # Errors
    /// - TransportError::Status on a non-success HTTP outcome
    /// - TransportError::Connection if the server cannot be reached
    fn send(&self, url: &str, body: Option<&str>) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(&self, url: &str, body: Option<&str>) -> Result<Vec<u8>, TransportError> {
        (**self).send(url, body)
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A request as seen by the mock
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub url: String,
        pub body: Option<String>,
    }

    /// Mock transport behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Always answer with these bytes
        Respond(Vec<u8>),
        /// Always fail with this error
        Fail(TransportError),
    }

    /// Mock Transport for testing
    ///
    /// Records every request it receives so tests can inspect framing.
    #[derive(Clone)]
    pub struct MockTransport {
        behavior: Arc<Mutex<MockBehavior>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockTransport {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Respond with a JSON value serialized to bytes
        pub fn new_json(value: serde_json::Value) -> Self {
            Self::new(MockBehavior::Respond(value.to_string().into_bytes()))
        }

        /// Respond with a successful envelope wrapping `result`
        pub fn new_success(result: serde_json::Value) -> Self {
            Self::new_json(serde_json::json!({
                "response": {
                    "input_check": "passed",
                    "processing_status": "success",
                    "result": result,
                }
            }))
        }

        pub fn new_raw(bytes: impl Into<Vec<u8>>) -> Self {
            Self::new(MockBehavior::Respond(bytes.into()))
        }

        pub fn new_fail(error: TransportError) -> Self {
            Self::new(MockBehavior::Fail(error))
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn last_request(&self) -> Option<RecordedRequest> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    impl Transport for MockTransport {
        fn send(&self, url: &str, body: Option<&str>) -> Result<Vec<u8>, TransportError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_string(),
                body: body.map(str::to_string),
            });

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Respond(bytes) => Ok(bytes),
                MockBehavior::Fail(err) => Err(err),
            }
        }
    }
}
