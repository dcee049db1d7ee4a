// HTTP transport implementation
// reason: reqwest blocking client, one request/response per call
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

use wrservices_core::port::{Transport, TransportError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    /// Ignore `HTTP_PROXY`-style environment settings
    pub no_proxy: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            no_proxy: false,
        }
    }
}

/// Blocking HTTP transport
///
/// GET when there is no body, form-encoded POST otherwise.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Arguments
    /// * `config` - Timeout and user agent
    ///
    /// # Example
    /// ```ignore
    /// let transport = HttpTransport::new(HttpTransportConfig::default())?;
    /// ```
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent);

        if config.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str, body: Option<&str>) -> Result<Vec<u8>, TransportError> {
        let request = match body {
            Some(body) => self
                .client
                .post(url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body.to_string()),
            None => self.client.get(url),
        };

        let response = request
            .send()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        debug!(status = %status.as_u16(), "Received response");

        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|e| TransportError::Connection(e.to_string()))
    }
}
